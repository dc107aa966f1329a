//! Mesh → bytes.

use crate::error::{FormatError, MeshError};
use crate::mesh::Mesh;
use crate::profiling::{profile_function, profile_plot};

use super::HEADER_SIZE;

/// Number of bytes [`encode`] produces for `mesh`.
pub fn encoded_len(mesh: &Mesh) -> usize {
    HEADER_SIZE
        + mesh.schema().len() * 4
        + mesh.vertices().len() * 4
        + mesh.indices().len() * 4
        + mesh.face_map().map_or(0, <[u8]>::len)
}

/// Encode `mesh` into the binary mesh format.
///
/// Meshes without vertices, triangles or attributes cannot be decoded, so
/// they are refused here with the matching [`FormatError`].
pub fn encode(mesh: &Mesh) -> Result<Vec<u8>, MeshError> {
    profile_function!();

    let vertex_count = header_count(mesh.vertex_count(), "vertex count")?;
    let triangle_count = header_count(mesh.triangle_count(), "triangle count")?;
    let attribute_count = header_count(mesh.schema().len(), "attribute count")?;
    if vertex_count == 0 {
        return Err(FormatError::ZeroVertices.into());
    }
    if triangle_count == 0 {
        return Err(FormatError::ZeroTriangles.into());
    }
    if attribute_count == 0 {
        return Err(FormatError::ZeroAttributes.into());
    }

    let mut out = Vec::with_capacity(encoded_len(mesh));
    out.extend_from_slice(&vertex_count.to_le_bytes());
    out.extend_from_slice(&triangle_count.to_le_bytes());
    out.extend_from_slice(&attribute_count.to_le_bytes());
    for code in mesh.schema().codes() {
        out.extend_from_slice(&code.to_le_bytes());
    }
    for value in mesh.vertices() {
        out.extend_from_slice(&value.to_le_bytes());
    }
    for index in mesh.indices() {
        out.extend_from_slice(&index.to_le_bytes());
    }
    if let Some(face_map) = mesh.face_map() {
        out.extend_from_slice(face_map);
    }

    profile_plot!("Encoded mesh bytes", out.len());
    log::debug!(
        "Encoded mesh: {vertex_count} vertices, {triangle_count} triangles, {} bytes",
        out.len()
    );
    Ok(out)
}

fn header_count(count: usize, what: &'static str) -> Result<u32, MeshError> {
    u32::try_from(count).map_err(|_| MeshError::ShapeMismatch {
        what,
        expected: u32::MAX as usize,
        actual: count,
    })
}
