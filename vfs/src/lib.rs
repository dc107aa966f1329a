//! Byte storage for vmesh assets.
//!
//! Mesh files, model descriptors and texture blobs are plain byte buffers.
//! This crate hides where those bytes live behind the [`VfsProvider`] trait
//! and routes paths to mounted providers through [`Vfs`].
//!
//! All operations are synchronous and operate on fully materialized
//! buffers; a provider either returns the whole file or an error.
//!
//! # Providers
//!
//! - [`MemoryProvider`] - in-memory storage for tests and baked assets (read-write)
//! - [`FileSystemProvider`] - native filesystem access (read-write, `filesystem` feature)
//!
//! Write operations are optional and default to [`VfsError::ReadOnly`].

mod error;
#[cfg(feature = "filesystem")]
mod filesystem;
mod memory;
pub mod path;
mod provider;
mod vfs;

pub use error::VfsError;
#[cfg(feature = "filesystem")]
pub use filesystem::FileSystemProvider;
pub use memory::MemoryProvider;
pub use provider::VfsProvider;
pub use vfs::Vfs;
