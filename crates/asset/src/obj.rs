//! OBJ loader supporting objects, positions, normals, texture coordinates,
//! faces and lines. Everything else (`mtllib`, `usemtl`, `g`, `s`, ...) is ignored.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use indexmap::IndexMap;

use crate::assembler::MeshDraft;
use crate::attributes::AttributeTables;
use crate::error::{AttributeKind, ElementKind, ObjError, ObjResult, SourceLine};
use crate::face::resolve_element;
use crate::mesh::Mesh;
use crate::model::ObjModel;

/// Name of the object collecting elements that appear before any `o`.
pub const UNNAMED_OBJECT: &str = "unnamed";

/// Load an OBJ model from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<ObjModel> {
    let path = path.as_ref();
    log::info!("Loading OBJ from {:?}", path);

    let file = File::open(path).map_err(|source| {
        log::error!("Failed to open OBJ file {:?}: {}", path, source);
        ObjError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let model = load_obj_from_reader(BufReader::new(file))?;

    log::info!("Loaded {} mesh(es) from {:?}", model.len(), path);
    Ok(model)
}

/// Load an OBJ model from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> ObjResult<ObjModel> {
    let mut parser = ObjParser::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        parser.feed(&SourceLine::new(line_no + 1, &line))?;
    }
    parser.finish()
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> ObjResult<ObjModel> {
    load_obj_from_reader(io::Cursor::new(contents))
}

/// Single-pass parser state. Dropped as a whole on the first error.
struct ObjParser {
    tables: AttributeTables,
    current: MeshDraft,
    /// `false` while `current` is the implicit object.
    explicit: bool,
    /// The implicit object had content, so its name is taken.
    implicit_used: bool,
    /// Every object name in use, including [`UNNAMED_OBJECT`] once the
    /// implicit object turned out non-empty.
    declared: HashSet<String>,
    meshes: IndexMap<String, Mesh>,
}

impl ObjParser {
    fn new() -> Self {
        Self {
            tables: AttributeTables::new(),
            current: MeshDraft::new(UNNAMED_OBJECT, 0),
            explicit: false,
            implicit_used: false,
            declared: HashSet::new(),
            meshes: IndexMap::new(),
        }
    }

    fn feed(&mut self, line: &SourceLine<'_>) -> ObjResult<()> {
        let trimmed = line.text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            return Ok(());
        };

        match tag {
            "o" => {
                let name = trimmed[tag.len()..].trim();
                if name.is_empty() {
                    return Err(line.parse_error("missing object name"));
                }
                if !self.explicit && !self.current.is_empty() {
                    self.implicit_used = true;
                    self.declared.insert(UNNAMED_OBJECT.to_owned());
                }
                if !self.declared.insert(name.to_owned()) {
                    let reason = if self.implicit_used && name == UNNAMED_OBJECT {
                        format!("object name '{name}' is reserved for elements before the first 'o'")
                    } else {
                        format!("duplicate object name '{name}'")
                    };
                    return Err(line.parse_error(reason));
                }
                self.open_object(name)?;
            }
            "v" => {
                let fields: Vec<&str> = parts.collect();
                let p = parse_vector::<3>(&fields, 4, AttributeKind::Position, line)?;
                self.tables.push_position(p);
                self.current.note_position(line);
            }
            "vn" => {
                let fields: Vec<&str> = parts.collect();
                let n = parse_vector::<3>(&fields, 3, AttributeKind::Normal, line)?;
                self.tables.push_normal(n);
            }
            "vt" => {
                let fields: Vec<&str> = parts.collect();
                let t = parse_vector::<2>(&fields, 3, AttributeKind::TexCoord, line)?;
                self.tables.push_texcoord(t);
            }
            "f" => {
                let refs = resolve_element(parts, ElementKind::Face, &self.tables, line)?;
                self.current.add_face(&refs, &self.tables, line)?;
            }
            "l" => {
                let refs = resolve_element(parts, ElementKind::Line, &self.tables, line)?;
                self.current.add_line(&refs, &self.tables, line)?;
            }
            other => {
                log::trace!("Ignoring '{}' directive on line {}", other, line.number);
            }
        }
        Ok(())
    }

    fn open_object(&mut self, name: &str) -> ObjResult<()> {
        let first_position = self.tables.len(AttributeKind::Position);
        let previous = std::mem::replace(&mut self.current, MeshDraft::new(name, first_position));
        self.explicit = true;
        self.flush(previous)
    }

    /// Names are unique by the time a draft gets here; `declared` guards them.
    fn flush(&mut self, draft: MeshDraft) -> ObjResult<()> {
        if let Some(mesh) = draft.finalize(&self.tables)? {
            self.meshes.insert(mesh.name().to_owned(), mesh);
        }
        Ok(())
    }

    fn finish(mut self) -> ObjResult<ObjModel> {
        let last = std::mem::replace(&mut self.current, MeshDraft::new(UNNAMED_OBJECT, 0));
        self.flush(last)?;
        Ok(ObjModel::new(self.meshes))
    }
}

/// Parse the first `N` fields as floats; up to `max` fields are accepted and
/// any beyond `N` must be numeric but are discarded.
fn parse_vector<const N: usize>(
    fields: &[&str],
    max: usize,
    kind: AttributeKind,
    line: &SourceLine<'_>,
) -> ObjResult<[f32; N]> {
    if fields.len() < N || fields.len() > max {
        let expected = if max == N {
            format!("{N}")
        } else {
            format!("{N}-{max}")
        };
        return Err(line.parse_error(format!(
            "{kind} expects {expected} components, found {}",
            fields.len()
        )));
    }

    let mut out = [0.0f32; N];
    for (i, token) in fields.iter().enumerate() {
        let value = token
            .parse::<f32>()
            .map_err(|_| line.parse_error(format!("invalid number '{token}'")))?;
        if i < N {
            out[i] = value;
        }
    }
    Ok(out)
}
