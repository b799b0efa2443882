//! Entry point for objmesh: load an OBJ file and report its meshes.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::{Mesh, ObjModel};

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    object: Option<String>,
    dump_buffer: bool,
}

fn parse_args() -> Args {
    // Accept: --input=<path> | <path>, --object=<name>, --dump-buffer
    let mut args = Args::default();
    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--input=") {
            args.input = Some(PathBuf::from(val));
        } else if let Some(val) = arg.strip_prefix("--object=") {
            args.object = Some(val.to_owned());
        } else if arg == "--dump-buffer" {
            args.dump_buffer = true;
        } else if arg.starts_with("--") {
            log::warn!("Unknown flag '{}', ignoring.", arg);
        } else if args.input.is_none() {
            args.input = Some(PathBuf::from(arg));
        } else {
            log::warn!("Extra argument '{}', ignoring.", arg);
        }
    }
    args
}

fn report_mesh(mesh: &Mesh, dump_buffer: bool) {
    let layout = mesh.buffer().layout();
    println!(
        "{}: {:?}, {} vertices, {} primitives, {} indices, stride {} bytes (normal: {:?}, texcoord: {:?})",
        mesh.name(),
        mesh.mesh_type(),
        mesh.vertex_count(),
        mesh.primitive_count(),
        mesh.indices().map_or(0, <[u32]>::len),
        layout.stride(),
        layout.normal_offset(),
        layout.texcoord_offset(),
    );

    if let Some(bounds) = mesh.bounds() {
        println!(
            "  bounds min={:?} max={:?} radius={:.4}",
            bounds.min.to_array(),
            bounds.max.to_array(),
            bounds.bounding_radius()
        );
    }

    if dump_buffer {
        for vertex in mesh.buffer().as_slice().chunks(layout.floats_per_vertex()) {
            println!("  {:?}", vertex);
        }
    }
}

fn report(model: &ObjModel, args: &Args) -> Result<()> {
    match &args.object {
        Some(name) => {
            let mesh = model
                .get(name)
                .with_context(|| format!("No object named '{}' in model", name))?;
            report_mesh(mesh, args.dump_buffer);
        }
        None => {
            for (_, mesh) in model.iter() {
                report_mesh(mesh, args.dump_buffer);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    let Some(input) = args.input.clone() else {
        bail!("Usage: objmesh --input=<file.obj> [--object=<name>] [--dump-buffer]");
    };

    let model = asset::load_obj_from_path(&input)
        .with_context(|| format!("Failed to load OBJ file: {}", input.display()))?;

    if model.is_empty() {
        log::warn!("{} contains no meshes", input.display());
    }
    report(&model, &args)?;

    if let Some(bounds) = model.bounds() {
        log::info!(
            "Model center={:?} size={:?}",
            bounds.center().to_array(),
            bounds.size().to_array()
        );
    }
    Ok(())
}
