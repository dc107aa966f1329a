//! Bytes → mesh.

use crate::attribute::AttributeSchema;
use crate::error::{FormatError, MeshError};
use crate::mesh::Mesh;
use crate::profiling::profile_function;

use super::HEADER_SIZE;

/// Little-endian cursor over a byte slice.
struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + len)
            .ok_or(FormatError::TooSmall {
                required: (self.pos + len) as u64,
                actual: self.data.len() as u64,
            })?;
        self.pos += len;
        Ok(bytes)
    }

    fn read_u32(&mut self) -> Result<u32, FormatError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u32s(&mut self, count: usize) -> Result<Vec<u32>, FormatError> {
        let bytes = self.take(count * 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    fn read_f32s(&mut self, count: usize) -> Result<Vec<f32>, FormatError> {
        let bytes = self.take(count * 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }
}

/// Byte length of the header, attribute list, vertex data and index data.
///
/// `None` when the size does not fit in a `u64`.
fn mandatory_len(
    attribute_count: u32,
    vertex_count: u32,
    triangle_count: u32,
    total_floats: usize,
) -> Option<u64> {
    let attributes = u64::from(attribute_count).checked_mul(4)?;
    let vertices = u64::from(vertex_count)
        .checked_mul(total_floats as u64)?
        .checked_mul(4)?;
    let indices = u64::from(triangle_count).checked_mul(3 * 4)?;
    (HEADER_SIZE as u64)
        .checked_add(attributes)?
        .checked_add(vertices)?
        .checked_add(indices)
}

/// Decode a mesh from the binary mesh format.
///
/// Decoding is all-or-nothing: any malformed input yields an error and no
/// mesh. Rejected inputs:
///
/// - a zero vertex, triangle or attribute count
/// - a buffer shorter than the header plus the mandatory sections
/// - an unknown attribute code
/// - an index that does not address a vertex
///
/// The face map is read when at least `triangle_count` bytes follow the
/// index data; bytes beyond it are ignored.
pub fn decode(data: &[u8]) -> Result<Mesh, MeshError> {
    profile_function!();

    let actual = data.len() as u64;
    let mut reader = ByteReader::new(data);

    let vertex_count = reader.read_u32()?;
    let triangle_count = reader.read_u32()?;
    let attribute_count = reader.read_u32()?;
    if vertex_count == 0 {
        return Err(FormatError::ZeroVertices.into());
    }
    if triangle_count == 0 {
        return Err(FormatError::ZeroTriangles.into());
    }
    if attribute_count == 0 {
        return Err(FormatError::ZeroAttributes.into());
    }

    let attribute_bytes = u64::from(attribute_count) * 4;
    if (HEADER_SIZE as u64) + attribute_bytes > actual {
        return Err(FormatError::TooSmall {
            required: HEADER_SIZE as u64 + attribute_bytes,
            actual,
        }
        .into());
    }
    let codes = reader.read_u32s(attribute_count as usize)?;
    let schema = AttributeSchema::from_codes(&codes)?;

    let required = mandatory_len(
        attribute_count,
        vertex_count,
        triangle_count,
        schema.total_floats(),
    )
    .unwrap_or(u64::MAX);
    if required > actual {
        return Err(FormatError::TooSmall { required, actual }.into());
    }

    let vertices = reader.read_f32s(vertex_count as usize * schema.total_floats())?;
    let indices = reader.read_u32s(triangle_count as usize * 3)?;
    if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
        return Err(FormatError::IndexOutOfBounds {
            index,
            vertex_count,
        }
        .into());
    }

    let face_map = if reader.remaining() >= triangle_count as usize {
        let bytes = reader.take(triangle_count as usize)?;
        Some(bytes.to_vec())
    } else {
        None
    };
    if reader.remaining() > 0 {
        log::warn!(
            "Ignoring {} trailing bytes after mesh data",
            reader.remaining()
        );
    }

    log::debug!(
        "Decoded mesh: {vertex_count} vertices, {triangle_count} triangles, face map: {}",
        face_map.is_some()
    );
    Ok(Mesh::from_raw_parts(schema, vertices, indices, face_map))
}
