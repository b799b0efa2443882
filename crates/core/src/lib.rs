//! Core shared types (renderer-agnostic): math re-exports and bounds.

pub use glam::{Vec3, vec3};

pub mod bounds;

pub use bounds::Aabb;
