//! The immutable, indexed triangle mesh.

use crate::attribute::AttributeSchema;
use crate::error::MeshError;

/// An indexed triangle mesh with flat `f32` vertex data.
///
/// Produced once (by [`MeshBuilder`](super::MeshBuilder), the codec, or
/// [`Mesh::new`]) and immutable afterwards, so it can be shared across
/// threads for reading.
///
/// # Invariants
///
/// - `vertices().len()` is a multiple of `schema().total_floats()`
/// - `indices().len()` is a multiple of 3
/// - every index is smaller than `vertex_count()`
/// - a face map, when present, holds one byte per triangle
#[derive(Clone)]
pub struct Mesh {
    schema: AttributeSchema,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    face_map: Option<Vec<u8>>,
}

impl Mesh {
    /// Create a mesh, checking every invariant.
    pub fn new(
        schema: AttributeSchema,
        vertices: Vec<f32>,
        indices: Vec<u32>,
        face_map: Option<Vec<u8>>,
    ) -> Result<Self, MeshError> {
        let stride = schema.total_floats();
        if stride == 0 && !vertices.is_empty() {
            return Err(MeshError::ShapeMismatch {
                what: "vertex buffer length",
                expected: 0,
                actual: vertices.len(),
            });
        }
        if stride != 0 && vertices.len() % stride != 0 {
            return Err(MeshError::ShapeMismatch {
                what: "vertex buffer length",
                expected: vertices.len().next_multiple_of(stride),
                actual: vertices.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                index_count: indices.len(),
            });
        }
        let vertex_count = vertices.len().checked_div(stride).unwrap_or(0);
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index: index as usize,
                len: vertex_count,
            });
        }
        let mesh = Self::from_raw_parts(schema, vertices, indices, None);
        match face_map {
            Some(face_map) => mesh.with_face_map(face_map),
            None => Ok(mesh),
        }
    }

    /// Assemble a mesh whose invariants the caller has already established.
    pub(crate) fn from_raw_parts(
        schema: AttributeSchema,
        vertices: Vec<f32>,
        indices: Vec<u32>,
        face_map: Option<Vec<u8>>,
    ) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(face_map.as_ref().is_none_or(|f| f.len() == indices.len() / 3));
        Self {
            schema,
            vertices,
            indices,
            face_map,
        }
    }

    /// Attach a per-triangle face map supplied by an external tool.
    ///
    /// The map must hold exactly one byte per triangle.
    pub fn with_face_map(mut self, face_map: Vec<u8>) -> Result<Self, MeshError> {
        if face_map.len() != self.triangle_count() {
            return Err(MeshError::ShapeMismatch {
                what: "face map length",
                expected: self.triangle_count(),
                actual: face_map.len(),
            });
        }
        self.face_map = Some(face_map);
        Ok(self)
    }

    /// Drop the face map, if any.
    pub fn without_face_map(mut self) -> Self {
        self.face_map = None;
        self
    }

    /// The vertex layout.
    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// All vertex floats, vertex after vertex.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Triangle indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The per-triangle face map, if present.
    pub fn face_map(&self) -> Option<&[u8]> {
        self.face_map.as_deref()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
            .len()
            .checked_div(self.schema.total_floats())
            .unwrap_or(0)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The floats of vertex `index`.
    pub fn vertex(&self, index: usize) -> Result<&[f32], MeshError> {
        let vertex_count = self.vertex_count();
        if index >= vertex_count {
            return Err(MeshError::IndexOutOfRange {
                index,
                len: vertex_count,
            });
        }
        let stride = self.schema.total_floats();
        Ok(&self.vertices[index * stride..(index + 1) * stride])
    }

    /// The three vertex indices of triangle `index`.
    pub fn triangle(&self, index: usize) -> Result<[u32; 3], MeshError> {
        let triangle_count = self.triangle_count();
        if index >= triangle_count {
            return Err(MeshError::IndexOutOfRange {
                index,
                len: triangle_count,
            });
        }
        let base = index * 3;
        Ok([
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ])
    }

    /// Vertex data as native-endian bytes, ready for a GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as native-endian `u32` bytes, ready for a GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Split the mesh into its parts.
    pub fn into_parts(self) -> (AttributeSchema, Vec<f32>, Vec<u32>, Option<Vec<u8>>) {
        (self.schema, self.vertices, self.indices, self.face_map)
    }
}

/// Vertex floats compare by bit pattern, so `NaN` payloads and signed zeros
/// must match exactly.
impl PartialEq for Mesh {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.indices == other.indices
            && self.face_map == other.face_map
            && self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Mesh {}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("schema", &self.schema.kinds())
            .field("vertex_count", &self.vertex_count())
            .field("triangle_count", &self.triangle_count())
            .field("has_face_map", &self.face_map.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(Mesh: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;

    fn quad() -> Mesh {
        let vertices = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        Mesh::new(
            AttributeSchema::position_only(),
            vertices,
            vec![0, 1, 2, 2, 3, 0],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_counts_and_vertex_access() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex(2).unwrap(), &[1.0, 1.0, 0.0]);
        assert_eq!(mesh.triangle(1).unwrap(), [2, 3, 0]);
        assert!(mesh.face_map().is_none());
    }

    #[test]
    fn test_vertex_out_of_range() {
        let mesh = quad();
        assert!(matches!(
            mesh.vertex(4),
            Err(MeshError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            mesh.triangle(2),
            Err(MeshError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_new_rejects_ragged_vertices() {
        let result = Mesh::new(
            AttributeSchema::position_only(),
            vec![0.0; 4],
            vec![],
            None,
        );
        assert!(matches!(
            result,
            Err(MeshError::ShapeMismatch {
                expected: 6,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_vertices_without_attributes() {
        let result = Mesh::new(
            AttributeSchema::new(Vec::<AttributeKind>::new()),
            vec![0.0; 4],
            vec![],
            None,
        );
        assert!(matches!(
            result,
            Err(MeshError::ShapeMismatch {
                expected: 0,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_partial_triangle() {
        let result = Mesh::new(
            AttributeSchema::position_only(),
            vec![0.0; 6],
            vec![0, 1],
            None,
        );
        assert!(matches!(
            result,
            Err(MeshError::IncompleteTriangle { index_count: 2 })
        ));
    }

    #[test]
    fn test_new_rejects_dangling_index() {
        let result = Mesh::new(
            AttributeSchema::position_only(),
            vec![0.0; 6],
            vec![0, 1, 2],
            None,
        );
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_face_map_length_checked() {
        let mesh = quad();
        assert!(mesh.clone().with_face_map(vec![1]).is_err());

        let mesh = mesh.with_face_map(vec![4, 7]).unwrap();
        assert_eq!(mesh.face_map(), Some(&[4u8, 7][..]));
        assert!(mesh.without_face_map().face_map().is_none());
    }

    #[test]
    fn test_equality_uses_bit_patterns() {
        let schema = AttributeSchema::new([AttributeKind::Scalar]);
        let nan = Mesh::new(schema.clone(), vec![f32::NAN], vec![0, 0, 0], None).unwrap();
        assert_eq!(nan, nan.clone());

        let pos = Mesh::new(schema.clone(), vec![0.0], vec![0, 0, 0], None).unwrap();
        let neg = Mesh::new(schema, vec![-0.0], vec![0, 0, 0], None).unwrap();
        assert_ne!(pos, neg);
    }

    #[test]
    fn test_upload_bytes() {
        let mesh = quad();
        assert_eq!(mesh.vertex_bytes().len(), 4 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }
}
