use std::path::PathBuf;

use asset::{MeshType, ObjError, load_obj_from_path};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn load_polygon_mesh() {
    let model = load_obj_from_path(fixture("cube.obj")).expect("load cube");
    assert_eq!(model.len(), 1);

    let mesh = model.get("Cube_Cube.001").expect("cube mesh");
    assert_eq!(mesh.mesh_type(), MeshType::Polygon);
    // 6 faces x 4 corners, every corner has its own normal/uv pairing.
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices().unwrap().len(), 36);

    let layout = mesh.buffer().layout();
    assert!(layout.has_normal && layout.has_texcoord);
    assert_eq!(layout.stride(), 32);
    assert_eq!(mesh.buffer().len(), mesh.vertex_count() * 8);

    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.size().to_array(), [2.0, 2.0, 2.0]);
}

#[test]
fn load_polyline_mesh() {
    let model = load_obj_from_path(fixture("testpath.obj")).expect("load paths");
    assert_eq!(model.names().collect::<Vec<_>>(), ["NurbsPath.001", "NurbsPath"]);

    let first = model.get("NurbsPath.001").unwrap();
    assert_eq!(first.mesh_type(), MeshType::Polyline);
    assert_eq!(first.vertex_count(), 4);
    assert_eq!(first.indices().unwrap().len(), 6);
    assert_eq!(first.buffer().layout().stride(), 12);

    let second = model.get("NurbsPath").unwrap();
    assert_eq!(second.mesh_type(), MeshType::Polyline);
    assert_eq!(second.vertex_count(), 3);
    assert_eq!(second.indices().unwrap(), &[0, 1, 1, 2]);
}

#[test]
fn load_multiple_objects() {
    let model = load_obj_from_path(fixture("crate_multiple.obj")).expect("load crates");
    assert_eq!(model.len(), 3);

    for (name, mesh) in &model {
        assert_eq!(mesh.vertex_count(), 4, "{name}");
        assert_eq!(mesh.indices().unwrap(), &[0, 1, 2, 0, 2, 3], "{name}");
        assert_eq!(mesh.buffer().layout().normal_offset(), Some(12));
    }

    let crate2 = model.get("Crate2").unwrap();
    assert_eq!(crate2.vertices()[0].position, [2.0, 0.0, 0.0]);

    let bounds = model.bounds().unwrap();
    assert_eq!(bounds.min.to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(bounds.max.to_array(), [5.0, 1.0, 0.0]);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_obj_from_path(fixture("does-not-exist.obj")).unwrap_err();
    assert!(matches!(err, ObjError::Open { ref path, .. } if path.ends_with("does-not-exist.obj")));
}
