//! Raw attribute tables: positions, normals and texture coordinates in file order.

use crate::error::{AttributeKind, ObjResult, SourceLine};

/// Append-only `v`/`vn`/`vt` tables shared by every object of a file.
/// OBJ indices are global, so these are never reset at `o` boundaries.
#[derive(Clone, Debug, Default)]
pub struct AttributeTables {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
}

impl AttributeTables {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_position(&mut self, p: [f32; 3]) {
        self.positions.push(p);
    }

    /// Stored as given; not normalized.
    #[inline]
    pub fn push_normal(&mut self, n: [f32; 3]) {
        self.normals.push(n);
    }

    #[inline]
    pub fn push_texcoord(&mut self, t: [f32; 2]) {
        self.texcoords.push(t);
    }

    #[inline]
    pub fn position(&self, idx: usize) -> Option<[f32; 3]> {
        self.positions.get(idx).copied()
    }

    #[inline]
    pub fn normal(&self, idx: usize) -> Option<[f32; 3]> {
        self.normals.get(idx).copied()
    }

    #[inline]
    pub fn texcoord(&self, idx: usize) -> Option<[f32; 2]> {
        self.texcoords.get(idx).copied()
    }

    pub fn len(&self, kind: AttributeKind) -> usize {
        match kind {
            AttributeKind::Position => self.positions.len(),
            AttributeKind::Normal => self.normals.len(),
            AttributeKind::TexCoord => self.texcoords.len(),
        }
    }

    /// Translate a 1-based (or negative, relative-from-end) OBJ index into a
    /// 0-based index into the table of `kind`, checked against its current length.
    pub(crate) fn resolve(
        &self,
        kind: AttributeKind,
        raw: i64,
        line: &SourceLine<'_>,
    ) -> ObjResult<usize> {
        let len = self.len(kind);
        let idx = if raw > 0 {
            raw - 1
        } else {
            // raw == 0 lands on len and is rejected below.
            len as i64 + raw
        };

        if raw == 0 || idx < 0 || idx as usize >= len {
            return Err(line.out_of_range(kind, raw, len));
        }
        Ok(idx as usize)
    }
}
