//! In-memory meshes and the builder that produces them.
//!
//! - [`MeshBuilder`] - Deduplicating, incremental vertex ingestion
//! - [`Mesh`] - Immutable vertex floats, triangle indices and optional face map
//! - [`remap_vertex`] - Reorder source floats into schema layout

mod builder;
mod data;

pub use builder::{MeshBuilder, remap_vertex};
pub use data::Mesh;
