//! CPU-side mesh representation produced by the OBJ loader.

use corelib::{Aabb, Vec3};

use crate::interleave::InterleavedBuffer;

/// Vertex with position and optional normal/uv. Values are in object space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CombinedVertex {
    pub position: [f32; 3],
    pub normal: Option<[f32; 3]>,
    pub texcoord: Option<[f32; 2]>,
}

impl CombinedVertex {
    pub fn new(position: [f32; 3], normal: Option<[f32; 3]>, texcoord: Option<[f32; 2]>) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}

/// Topology of a mesh, inferred from which element directives its object used.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MeshType {
    /// Only `v`/`vn`/`vt`; no index list.
    Points,
    /// Only `l`; indices form a line list.
    Polyline,
    /// At least one `f`; indices form a triangle list.
    Polygon,
}

impl MeshType {
    /// Vertices per primitive in the index list.
    pub fn primitive_vertex_count(self) -> usize {
        match self {
            MeshType::Points => 1,
            MeshType::Polyline => 2,
            MeshType::Polygon => 3,
        }
    }
}

/// Immutable mesh: finalized once by the loader, read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<CombinedVertex>,
    indices: Option<Vec<u32>>,
    mesh_type: MeshType,
    buffer: InterleavedBuffer,
}

impl Mesh {
    pub(crate) fn from_parts(
        name: String,
        vertices: Vec<CombinedVertex>,
        indices: Option<Vec<u32>>,
        mesh_type: MeshType,
        buffer: InterleavedBuffer,
    ) -> Self {
        Self {
            name,
            vertices,
            indices,
            mesh_type,
            buffer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[CombinedVertex] {
        &self.vertices
    }

    /// `None` for point clouds.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn mesh_type(&self) -> MeshType {
        self.mesh_type
    }

    /// Interleaved vertex data plus its layout, ready for upload.
    pub fn buffer(&self) -> &InterleavedBuffer {
        &self.buffer
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Points, line segments or triangles, depending on [`Mesh::mesh_type`].
    pub fn primitive_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / self.mesh_type.primitive_vertex_count(),
            None => self.vertices.len(),
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interleave::build_interleaved;

    fn line_mesh() -> Mesh {
        let vertices = vec![
            CombinedVertex::new([0.0, 0.0, 0.0], None, None),
            CombinedVertex::new([2.0, -1.0, 0.0], None, None),
            CombinedVertex::new([1.0, 3.0, 4.0], None, None),
        ];
        let buffer = build_interleaved("path", &vertices).unwrap();
        Mesh::from_parts(
            "path".into(),
            vertices,
            Some(vec![0, 1, 1, 2]),
            MeshType::Polyline,
            buffer,
        )
    }

    #[test]
    fn primitive_counts() {
        let mesh = line_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.primitive_count(), 2);
        assert_eq!(mesh.indices(), Some(&[0, 1, 1, 2][..]));
    }

    #[test]
    fn bounds_cover_all_positions() {
        let b = line_mesh().bounds().unwrap();
        assert_eq!(b.min, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(2.0, 3.0, 4.0));
    }
}
