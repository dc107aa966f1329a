//! # vmesh core
//!
//! Vertex meshes with a flexible per-vertex layout.
//!
//! - [`attribute`] - Attribute kinds and the per-vertex [`AttributeSchema`](attribute::AttributeSchema)
//! - [`mesh`] - The immutable [`Mesh`](mesh::Mesh) and the deduplicating [`MeshBuilder`](mesh::MeshBuilder)
//! - [`codec`] - The little-endian binary mesh format
//! - [`model`] - Model descriptors and loading through [`vmesh_vfs`]
//! - [`profiling`] - Optional Tracy instrumentation

pub mod attribute;
pub mod codec;
mod error;
pub mod mesh;
pub mod model;
pub mod profiling;

pub use error::{FormatError, MeshError};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
