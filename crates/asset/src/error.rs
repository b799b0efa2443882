//! Error taxonomy for OBJ loading. Every variant aborts the parse.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Kind of per-vertex attribute a reference or table entry refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    Position,
    Normal,
    TexCoord,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeKind::Position => "position",
            AttributeKind::Normal => "normal",
            AttributeKind::TexCoord => "texture coordinate",
        })
    }
}

/// Element directive that references attributes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementKind {
    Face,
    Line,
}

impl ElementKind {
    /// Minimum number of vertex references the element needs.
    pub fn min_refs(self) -> usize {
        match self {
            ElementKind::Face => 3,
            ElementKind::Line => 2,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Face => "face",
            ElementKind::Line => "line",
        })
    }
}

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open OBJ file {file}: {source}", file = .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error on line {line} ('{content}'): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Malformed {element} on line {line} ('{content}'): needs at least {min} references, found {found}")]
    MalformedElement {
        line: usize,
        content: String,
        element: ElementKind,
        min: usize,
        found: usize,
    },

    #[error("{attribute} index {index} out of range (len={len}) on line {line} ('{content}')")]
    IndexOutOfRange {
        line: usize,
        content: String,
        attribute: AttributeKind,
        index: i64,
        len: usize,
    },

    #[error("Object '{object}' mixes vertices with and without a {attribute}")]
    InconsistentAttributes {
        object: String,
        attribute: AttributeKind,
    },

    #[error("Too many vertices in object (>{max}) on line {line}", max = u32::MAX)]
    TooManyVertices { line: usize },
}

impl ObjError {
    /// 1-based source line the error was raised on, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Parse { line, .. }
            | ObjError::MalformedElement { line, .. }
            | ObjError::IndexOutOfRange { line, .. }
            | ObjError::TooManyVertices { line } => Some(*line),
            ObjError::Io(_) | ObjError::Open { .. } | ObjError::InconsistentAttributes { .. } => None,
        }
    }
}

pub type ObjResult<T> = Result<T, ObjError>;

/// A source line being processed; carries the context errors are built from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SourceLine<'a> {
    /// 1-based.
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    pub fn parse_error(&self, reason: impl Into<String>) -> ObjError {
        ObjError::Parse {
            line: self.number,
            content: self.text.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn malformed(&self, element: ElementKind, found: usize) -> ObjError {
        ObjError::MalformedElement {
            line: self.number,
            content: self.text.to_owned(),
            element,
            min: element.min_refs(),
            found,
        }
    }

    pub fn out_of_range(&self, attribute: AttributeKind, index: i64, len: usize) -> ObjError {
        ObjError::IndexOutOfRange {
            line: self.number,
            content: self.text.to_owned(),
            attribute,
            index,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_and_content() {
        let src = SourceLine::new(7, "f 1/2");
        let err = src.malformed(ElementKind::Face, 1);
        assert_eq!(err.line(), Some(7));
        let msg = err.to_string();
        assert!(msg.contains("line 7"), "{msg}");
        assert!(msg.contains("'f 1/2'"), "{msg}");
        assert!(msg.contains("at least 3"), "{msg}");
    }

    #[test]
    fn inconsistent_attributes_has_no_line() {
        let err = ObjError::InconsistentAttributes {
            object: "Cube".into(),
            attribute: AttributeKind::Normal,
        };
        assert_eq!(err.line(), None);
        assert_eq!(
            err.to_string(),
            "Object 'Cube' mixes vertices with and without a normal"
        );
    }
}
