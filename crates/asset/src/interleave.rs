//! Interleaved vertex buffer: `pos[3] (normal[3]) (uv[2])` per vertex.

use crate::error::{AttributeKind, ObjError, ObjResult};
use crate::mesh::CombinedVertex;

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// Which optional attributes each vertex of a buffer carries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct VertexLayout {
    pub has_normal: bool,
    pub has_texcoord: bool,
}

impl VertexLayout {
    pub const POSITION_ONLY: VertexLayout = VertexLayout {
        has_normal: false,
        has_texcoord: false,
    };

    pub fn floats_per_vertex(&self) -> usize {
        let mut floats = 3;
        if self.has_normal {
            floats += 3;
        }
        if self.has_texcoord {
            floats += 2;
        }
        floats
    }

    /// Bytes per vertex.
    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * F32_SIZE
    }

    pub fn position_offset(&self) -> usize {
        0
    }

    /// Byte offset of the normal within a vertex.
    pub fn normal_offset(&self) -> Option<usize> {
        self.has_normal.then_some(3 * F32_SIZE)
    }

    /// Byte offset of the texture coordinate within a vertex.
    pub fn texcoord_offset(&self) -> Option<usize> {
        let floats = if self.has_normal { 6 } else { 3 };
        self.has_texcoord.then_some(floats * F32_SIZE)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterleavedBuffer {
    data: Vec<f32>,
    layout: VertexLayout,
}

impl InterleavedBuffer {
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes in native endianness, as handed to a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.layout.floats_per_vertex()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Serialize `vertices` in order. All vertices must agree on which optional
/// attributes they carry; `object` names the mesh in the error otherwise.
pub fn build_interleaved(object: &str, vertices: &[CombinedVertex]) -> ObjResult<InterleavedBuffer> {
    let layout = match vertices.first() {
        Some(v) => VertexLayout {
            has_normal: v.normal.is_some(),
            has_texcoord: v.texcoord.is_some(),
        },
        None => VertexLayout::POSITION_ONLY,
    };

    let inconsistent = |attribute| ObjError::InconsistentAttributes {
        object: object.to_owned(),
        attribute,
    };

    let mut data = Vec::with_capacity(vertices.len() * layout.floats_per_vertex());
    for v in vertices {
        data.extend_from_slice(&v.position);

        match (layout.has_normal, v.normal) {
            (true, Some(n)) => data.extend_from_slice(&n),
            (false, None) => {}
            _ => return Err(inconsistent(AttributeKind::Normal)),
        }

        match (layout.has_texcoord, v.texcoord) {
            (true, Some(t)) => data.extend_from_slice(&t),
            (false, None) => {}
            _ => return Err(inconsistent(AttributeKind::TexCoord)),
        }
    }

    Ok(InterleavedBuffer { data, layout })
}
