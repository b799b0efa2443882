//! Asset loading: Wavefront OBJ parsing into render-ready meshes.
//!
//! [`load_obj_from_path`] and friends read a file in one pass and return an
//! [`ObjModel`]: one [`Mesh`] per non-empty `o` section, each with deduplicated
//! combined vertices, an optional index list and an interleaved vertex buffer.

pub mod assembler;
pub mod attributes;
pub mod dedup;
pub mod error;
pub mod face;
pub mod interleave;
pub mod mesh;
pub mod model;
pub mod obj;

pub use error::{AttributeKind, ElementKind, ObjError, ObjResult};
pub use face::FaceVertexRef;
pub use interleave::{InterleavedBuffer, VertexLayout, build_interleaved};
pub use mesh::{CombinedVertex, Mesh, MeshType};
pub use model::ObjModel;
pub use obj::{UNNAMED_OBJECT, load_obj_from_path, load_obj_from_reader, load_obj_from_str};
