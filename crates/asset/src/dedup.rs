//! Per-object vertex deduplication: one combined vertex per unique reference tuple.

use std::collections::HashMap;

use crate::attributes::AttributeTables;
use crate::error::{AttributeKind, ObjError, ObjResult, SourceLine};
use crate::face::FaceVertexRef;
use crate::mesh::CombinedVertex;

/// Maps each distinct [`FaceVertexRef`] to the index of the combined vertex
/// built for it. Scoped to one object; a new object starts a fresh index.
#[derive(Debug, Default)]
pub struct VertexIndex {
    unique: HashMap<FaceVertexRef, u32>,
    vertices: Vec<CombinedVertex>,
}

impl VertexIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the combined-vertex index for `key`, creating the vertex from
    /// `tables` on first sight.
    pub(crate) fn resolve(
        &mut self,
        key: FaceVertexRef,
        tables: &AttributeTables,
        line: &SourceLine<'_>,
    ) -> ObjResult<u32> {
        if let Some(&idx) = self.unique.get(&key) {
            return Ok(idx);
        }

        let vertex = lookup(key, tables, line)?;
        let idx = self.push(vertex, line)?;
        self.unique.insert(key, idx);
        Ok(idx)
    }

    /// Append a vertex that does not take part in deduplication (point clouds).
    pub(crate) fn push(&mut self, vertex: CombinedVertex, line: &SourceLine<'_>) -> ObjResult<u32> {
        let idx = u32::try_from(self.vertices.len())
            .map_err(|_| ObjError::TooManyVertices { line: line.number })?;
        self.vertices.push(vertex);
        Ok(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[CombinedVertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<CombinedVertex> {
        self.vertices
    }
}

fn lookup(
    key: FaceVertexRef,
    tables: &AttributeTables,
    line: &SourceLine<'_>,
) -> ObjResult<CombinedVertex> {
    let missing = |kind: AttributeKind, idx: usize| {
        line.out_of_range(kind, idx as i64 + 1, tables.len(kind))
    };

    let position = tables
        .position(key.position)
        .ok_or_else(|| missing(AttributeKind::Position, key.position))?;
    let normal = key
        .normal
        .map(|i| tables.normal(i).ok_or_else(|| missing(AttributeKind::Normal, i)))
        .transpose()?;
    let texcoord = key
        .texcoord
        .map(|i| tables.texcoord(i).ok_or_else(|| missing(AttributeKind::TexCoord, i)))
        .transpose()?;

    Ok(CombinedVertex::new(position, normal, texcoord))
}
