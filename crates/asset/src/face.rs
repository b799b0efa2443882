//! Face/line vertex references (`v`, `v/vt`, `v//vn`, `v/vt/vn`).

use crate::attributes::AttributeTables;
use crate::error::{AttributeKind, ElementKind, ObjResult, SourceLine};

/// One resolved reference of an element: 0-based indices into the attribute
/// tables. Structural equality/hash is the deduplication key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FaceVertexRef {
    pub position: usize,
    pub normal: Option<usize>,
    pub texcoord: Option<usize>,
}

impl FaceVertexRef {
    pub fn new(position: usize, normal: Option<usize>, texcoord: Option<usize>) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}

/// Resolve every reference field of a `f`/`l` line, preserving winding order.
pub(crate) fn resolve_element<'a, I>(
    fields: I,
    element: ElementKind,
    tables: &AttributeTables,
    line: &SourceLine<'_>,
) -> ObjResult<Vec<FaceVertexRef>>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = fields.into_iter().collect();
    if fields.len() < element.min_refs() {
        return Err(line.malformed(element, fields.len()));
    }

    fields
        .into_iter()
        .map(|field| resolve_ref(field, tables, line))
        .collect()
}

fn resolve_ref(
    field: &str,
    tables: &AttributeTables,
    line: &SourceLine<'_>,
) -> ObjResult<FaceVertexRef> {
    let mut split = field.split('/');

    // split always yields at least one item.
    let pos = split.next().unwrap_or_default();
    if pos.is_empty() {
        return Err(line.parse_error(format!("missing position index in '{field}'")));
    }
    let position = tables.resolve(AttributeKind::Position, parse_index(pos, line)?, line)?;

    let texcoord = match split.next() {
        Some(value) if !value.is_empty() => Some(tables.resolve(
            AttributeKind::TexCoord,
            parse_index(value, line)?,
            line,
        )?),
        _ => None,
    };

    let normal = match split.next() {
        Some(value) if !value.is_empty() => Some(tables.resolve(
            AttributeKind::Normal,
            parse_index(value, line)?,
            line,
        )?),
        _ => None,
    };

    if split.next().is_some() {
        return Err(line.parse_error(format!("too many '/' separators in '{field}'")));
    }

    Ok(FaceVertexRef::new(position, normal, texcoord))
}

fn parse_index(token: &str, line: &SourceLine<'_>) -> ObjResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| line.parse_error(format!("invalid index '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObjError;

    fn tables() -> AttributeTables {
        let mut t = AttributeTables::new();
        for i in 0..4 {
            t.push_position([i as f32, 0.0, 0.0]);
            t.push_normal([0.0, 0.0, 1.0]);
            t.push_texcoord([i as f32, 1.0]);
        }
        t
    }

    fn resolve(text: &str, element: ElementKind) -> ObjResult<Vec<FaceVertexRef>> {
        let line = SourceLine::new(3, text);
        let fields = text.split_whitespace().skip(1);
        resolve_element(fields, element, &tables(), &line)
    }

    #[test]
    fn all_reference_forms() {
        let refs = resolve("f 1 2/3 3//4 4/1/2", ElementKind::Face).unwrap();
        assert_eq!(
            refs,
            vec![
                FaceVertexRef::new(0, None, None),
                FaceVertexRef::new(1, None, Some(2)),
                FaceVertexRef::new(2, Some(3), None),
                FaceVertexRef::new(3, Some(1), Some(0)),
            ]
        );
    }

    #[test]
    fn relative_references() {
        let refs = resolve("l -1/-1/-1 -4", ElementKind::Line).unwrap();
        assert_eq!(refs[0], FaceVertexRef::new(3, Some(3), Some(3)));
        assert_eq!(refs[1], FaceVertexRef::new(0, None, None));
    }

    #[test]
    fn absence_is_part_of_identity() {
        let a = FaceVertexRef::new(0, None, None);
        let b = FaceVertexRef::new(0, Some(0), None);
        assert_ne!(a, b);
    }

    #[test]
    fn too_few_references() {
        let err = resolve("f 1/2", ElementKind::Face).unwrap_err();
        assert!(matches!(
            err,
            ObjError::MalformedElement {
                line: 3,
                element: ElementKind::Face,
                found: 1,
                ..
            }
        ));

        let err = resolve("l 1", ElementKind::Line).unwrap_err();
        assert!(matches!(err, ObjError::MalformedElement { min: 2, .. }));
    }

    #[test]
    fn reference_count_is_checked_before_lookup() {
        let mut positions_only = AttributeTables::new();
        positions_only.push_position([0.0, 0.0, 0.0]);

        for (text, element) in [("f 1/2", ElementKind::Face), ("l 9", ElementKind::Line)] {
            let line = SourceLine::new(4, text);
            let fields = text.split_whitespace().skip(1);
            let err = resolve_element(fields, element, &positions_only, &line).unwrap_err();
            assert!(
                matches!(err, ObjError::MalformedElement { line: 4, found: 1, .. }),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn non_numeric_index_is_parse_error() {
        let err = resolve("f 1 a 3", ElementKind::Face).unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 3, .. }));

        let err = resolve("f 1 /2 3", ElementKind::Face).unwrap_err();
        assert!(matches!(err, ObjError::Parse { .. }));

        let err = resolve("f 1/1/1/1 2 3", ElementKind::Face).unwrap_err();
        assert!(matches!(err, ObjError::Parse { .. }));
    }

    #[test]
    fn out_of_range_normal() {
        let err = resolve("f 1//9 2//1 3//1", ElementKind::Face).unwrap_err();
        assert!(matches!(
            err,
            ObjError::IndexOutOfRange {
                attribute: AttributeKind::Normal,
                index: 9,
                len: 4,
                ..
            }
        ));
    }
}
