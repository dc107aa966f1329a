//! Binary mesh format.
//!
//! A mesh is stored as a single little-endian buffer:
//!
//! | Section | Contents |
//! |---------|----------|
//! | header | `vertex_count: u32`, `triangle_count: u32`, `attribute_count: u32` |
//! | attributes | `attribute_count` × `u32` attribute codes, in schema order |
//! | vertices | `vertex_count × total_floats` × `f32` |
//! | indices | `triangle_count × 3` × `u32` |
//! | face map (optional) | `triangle_count` × `u8` |
//!
//! The face map carries no flag: it is present exactly when at least
//! `triangle_count` bytes follow the index data. Byte order is little-endian
//! on every host.
//!
//! # Example
//!
//! ```
//! use vmesh_core::attribute::AttributeSchema;
//! use vmesh_core::codec::{decode, encode};
//! use vmesh_core::mesh::MeshBuilder;
//!
//! let mut builder = MeshBuilder::new(AttributeSchema::position_only());
//! for v in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
//!     builder.add_vertex(&v)?;
//! }
//! let mesh = builder.to_mesh()?;
//!
//! let bytes = encode(&mesh)?;
//! assert_eq!(decode(&bytes)?, mesh);
//! # Ok::<(), vmesh_core::MeshError>(())
//! ```

mod reader;
#[cfg(test)]
mod tests;
mod writer;

use std::io::{Read, Write};

use crate::error::MeshError;
use crate::mesh::Mesh;

pub use reader::decode;
pub use writer::{encode, encoded_len};

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 12;

/// Encode `mesh` and write it to `writer`.
///
/// Writer failures surface as [`MeshError::Io`].
pub fn write_mesh<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), MeshError> {
    let bytes = encode(mesh)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Read `reader` to its end and decode the bytes as a mesh.
///
/// Reader failures surface as [`MeshError::Io`].
pub fn read_mesh<R: Read>(reader: &mut R) -> Result<Mesh, MeshError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}
