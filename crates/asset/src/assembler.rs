//! Per-object mesh drafts: element accumulation, classification and finalize.

use crate::attributes::AttributeTables;
use crate::dedup::VertexIndex;
use crate::error::{AttributeKind, ObjResult, SourceLine};
use crate::face::FaceVertexRef;
use crate::interleave::build_interleaved;
use crate::mesh::{CombinedVertex, Mesh, MeshType};

/// Mutable state of the object currently being parsed.
#[derive(Debug)]
pub struct MeshDraft {
    name: String,
    index: VertexIndex,
    triangles: Vec<u32>,
    segments: Vec<u32>,
    saw_face: bool,
    saw_line: bool,
    /// Positions declared inside this object's section: `first..first + count`.
    first_position: usize,
    position_count: usize,
    /// Line of the last `v` in the section; used for errors in point clouds.
    last_position_line: usize,
}

impl MeshDraft {
    /// `first_position` is the position table length when the object opened.
    pub fn new(name: impl Into<String>, first_position: usize) -> Self {
        Self {
            name: name.into(),
            index: VertexIndex::new(),
            triangles: Vec::new(),
            segments: Vec::new(),
            saw_face: false,
            saw_line: false,
            first_position,
            position_count: 0,
            last_position_line: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record that a `v` was declared while this object was open.
    pub(crate) fn note_position(&mut self, line: &SourceLine<'_>) {
        self.position_count += 1;
        self.last_position_line = line.number;
    }

    /// Triangulate a polygon as a fan from its first reference.
    pub(crate) fn add_face(
        &mut self,
        refs: &[FaceVertexRef],
        tables: &AttributeTables,
        line: &SourceLine<'_>,
    ) -> ObjResult<()> {
        let corners = self.resolve_all(refs, tables, line)?;
        self.saw_face = true;
        if let Some((&first, rest)) = corners.split_first() {
            for pair in rest.windows(2) {
                self.triangles.extend_from_slice(&[first, pair[0], pair[1]]);
            }
        }
        Ok(())
    }

    /// Store a polyline as a line list: one index pair per segment.
    pub(crate) fn add_line(
        &mut self,
        refs: &[FaceVertexRef],
        tables: &AttributeTables,
        line: &SourceLine<'_>,
    ) -> ObjResult<()> {
        let points = self.resolve_all(refs, tables, line)?;
        self.saw_line = true;
        for pair in points.windows(2) {
            self.segments.extend_from_slice(&[pair[0], pair[1]]);
        }
        Ok(())
    }

    fn resolve_all(
        &mut self,
        refs: &[FaceVertexRef],
        tables: &AttributeTables,
        line: &SourceLine<'_>,
    ) -> ObjResult<Vec<u32>> {
        refs.iter()
            .map(|r| self.index.resolve(*r, tables, line))
            .collect()
    }

    pub fn mesh_type(&self) -> MeshType {
        if self.saw_face {
            MeshType::Polygon
        } else if self.saw_line {
            MeshType::Polyline
        } else {
            MeshType::Points
        }
    }

    /// `true` if the object has neither elements nor declared positions.
    pub fn is_empty(&self) -> bool {
        !self.saw_face && !self.saw_line && self.position_count == 0
    }

    /// Freeze into a [`Mesh`]. `Ok(None)` for an empty object.
    pub(crate) fn finalize(self, tables: &AttributeTables) -> ObjResult<Option<Mesh>> {
        if self.is_empty() {
            log::trace!("Dropping empty object '{}'", self.name);
            return Ok(None);
        }

        let mesh_type = self.mesh_type();
        let MeshDraft {
            name,
            mut index,
            triangles,
            segments,
            first_position,
            position_count,
            last_position_line,
            ..
        } = self;

        let indices = match mesh_type {
            MeshType::Polygon => {
                if !segments.is_empty() {
                    log::warn!(
                        "Object '{}' has faces; dropping {} line segment(s)",
                        name,
                        segments.len() / 2
                    );
                }
                Some(triangles)
            }
            MeshType::Polyline => Some(segments),
            MeshType::Points => {
                let line = SourceLine::new(last_position_line, "v");
                for i in first_position..first_position + position_count {
                    let position = tables.position(i).ok_or_else(|| {
                        line.out_of_range(
                            AttributeKind::Position,
                            i as i64 + 1,
                            tables.len(AttributeKind::Position),
                        )
                    })?;
                    index.push(CombinedVertex::new(position, None, None), &line)?;
                }
                None
            }
        };

        let vertices = index.into_vertices();
        let buffer = build_interleaved(&name, &vertices)?;

        log::debug!(
            "Finalized object '{}': {:?}, {} vertices, {} indices",
            name,
            mesh_type,
            vertices.len(),
            indices.as_ref().map_or(0, Vec::len)
        );

        Ok(Some(Mesh::from_parts(name, vertices, indices, mesh_type, buffer)))
    }
}
