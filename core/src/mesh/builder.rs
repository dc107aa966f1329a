//! Incremental mesh construction with bit-exact vertex deduplication.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher, RandomState};

use crate::attribute::AttributeSchema;
use crate::error::MeshError;
use crate::profiling::profile_function;

use super::data::Mesh;

/// Builds an indexed [`Mesh`] from a stream of vertices.
///
/// Every added vertex appends one entry to the index buffer. A vertex whose
/// floats are bit-for-bit identical to an earlier one reuses that vertex's
/// index instead of being stored again. Identity is by bit pattern, not by
/// numeric value: `0.0` and `-0.0` are different vertices, and so are NaNs
/// with different payloads. There is no epsilon merging.
///
/// Lookups go through a hash of the float bit patterns. Vertices sharing a
/// hash are compared float by float before an index is reused, so collisions
/// only cost a short linear scan.
///
/// # Snapshots
///
/// [`to_mesh`](Self::to_mesh) copies the current state and leaves the builder
/// untouched; later vertices extend the same mesh. To start an unrelated mesh
/// call [`clear`](Self::clear) first, or use [`into_mesh`](Self::into_mesh)
/// to hand the buffers over without copying.
///
/// # Example
///
/// ```
/// use vmesh_core::attribute::AttributeSchema;
/// use vmesh_core::mesh::MeshBuilder;
///
/// let mut builder = MeshBuilder::new(AttributeSchema::position_only());
/// builder.add_vertex(&[0.0, 0.0, 0.0])?;
/// builder.add_vertex(&[0.0, 0.0, 0.0])?;
/// builder.add_vertex(&[1.0, 0.0, 0.0])?;
///
/// let mesh = builder.to_mesh()?;
/// assert_eq!(mesh.vertex_count(), 2);
/// assert_eq!(mesh.indices(), &[0, 0, 1]);
/// # Ok::<(), vmesh_core::MeshError>(())
/// ```
pub struct MeshBuilder<S = RandomState> {
    schema: AttributeSchema,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    /// Vertex hash to the indices of every stored vertex with that hash.
    vertex_lookup: HashMap<u64, Vec<u32>>,
    hasher: S,
}

impl MeshBuilder {
    /// Create an empty builder for vertices laid out by `schema`.
    pub fn new(schema: AttributeSchema) -> Self {
        Self::with_hasher(schema, RandomState::new())
    }

    /// Create a builder with room for `vertex_capacity` unique vertices and
    /// `index_capacity` indices.
    pub fn with_capacity(
        schema: AttributeSchema,
        vertex_capacity: usize,
        index_capacity: usize,
    ) -> Self {
        Self::with_capacity_and_hasher(schema, vertex_capacity, index_capacity, RandomState::new())
    }
}

impl<S: BuildHasher> MeshBuilder<S> {
    /// Create an empty builder hashing vertices with `hasher`.
    pub fn with_hasher(schema: AttributeSchema, hasher: S) -> Self {
        Self::with_capacity_and_hasher(schema, 0, 0, hasher)
    }

    /// Create a builder with preallocated buffers and a custom vertex hasher.
    pub fn with_capacity_and_hasher(
        schema: AttributeSchema,
        vertex_capacity: usize,
        index_capacity: usize,
        hasher: S,
    ) -> Self {
        let float_capacity = vertex_capacity.saturating_mul(schema.total_floats());
        Self {
            schema,
            vertices: Vec::with_capacity(float_capacity),
            indices: Vec::with_capacity(index_capacity),
            vertex_lookup: HashMap::with_capacity(vertex_capacity),
            hasher,
        }
    }

    /// The vertex layout this builder accepts.
    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// Number of unique vertices stored so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices
            .len()
            .checked_div(self.schema.total_floats())
            .unwrap_or(0)
    }

    /// Number of indices recorded so far.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Add a vertex given in schema order and return its index.
    ///
    /// `values` must hold exactly `schema().total_floats()` floats; otherwise
    /// [`MeshError::ShapeMismatch`] is returned and the builder is unchanged.
    pub fn add_vertex(&mut self, values: &[f32]) -> Result<u32, MeshError> {
        let expected = self.schema.total_floats();
        if values.len() != expected {
            return Err(MeshError::ShapeMismatch {
                what: "vertex length",
                expected,
                actual: values.len(),
            });
        }
        self.insert(values)
    }

    /// Add a vertex whose floats are picked out of `values` by `mapping`.
    ///
    /// Slot `i` of the stored vertex is `values[j]` when `mapping[i]` is
    /// `Some(j)` and `0.0` when it is `None`. `mapping` must have one entry per
    /// schema float. See [`remap_vertex`].
    pub fn add_mapped_vertex(
        &mut self,
        mapping: &[Option<usize>],
        values: &[f32],
    ) -> Result<u32, MeshError> {
        let expected = self.schema.total_floats();
        if mapping.len() != expected {
            return Err(MeshError::ShapeMismatch {
                what: "mapping length",
                expected,
                actual: mapping.len(),
            });
        }
        let vertex = remap_vertex(mapping, values)?;
        self.insert(&vertex)
    }

    /// Reset all vertices and indices. The schema and hasher are kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.vertex_lookup.clear();
    }

    /// Copy the current state into an immutable [`Mesh`].
    ///
    /// The builder is left as it was and may keep receiving vertices; call
    /// [`clear`](Self::clear) before building an unrelated mesh. Fails with
    /// [`MeshError::IncompleteTriangle`] while the index count is not a
    /// multiple of 3.
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        profile_function!();
        self.check_triangles()?;
        log::debug!(
            "Mesh snapshot: {} vertices, {} triangles",
            self.vertex_count(),
            self.indices.len() / 3
        );
        Ok(Mesh::from_raw_parts(
            self.schema.clone(),
            self.vertices.clone(),
            self.indices.clone(),
            None,
        ))
    }

    /// Consume the builder and move its buffers into a [`Mesh`].
    pub fn into_mesh(self) -> Result<Mesh, MeshError> {
        self.check_triangles()?;
        Ok(Mesh::from_raw_parts(
            self.schema,
            self.vertices,
            self.indices,
            None,
        ))
    }

    /// Returns `true` when the index count is **not** a multiple of 3.
    ///
    /// Despite the name, `true` signals an incomplete trailing triangle.
    #[deprecated(
        note = "returns true when the index count is NOT a multiple of 3; use has_incomplete_triangle"
    )]
    pub fn is_triangular(&self) -> bool {
        self.has_incomplete_triangle()
    }

    /// Whether the recorded indices end in a partial triangle.
    pub fn has_incomplete_triangle(&self) -> bool {
        self.indices.len() % 3 != 0
    }

    fn check_triangles(&self) -> Result<(), MeshError> {
        if self.has_incomplete_triangle() {
            return Err(MeshError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, vertex: &[f32]) -> Result<u32, MeshError> {
        let stride = vertex.len();
        if stride == 0 {
            // Zero-width vertices cannot be told apart or stored.
            return Err(MeshError::ShapeMismatch {
                what: "floats per vertex",
                expected: 1,
                actual: 0,
            });
        }

        let hash = self.hash_vertex(vertex);
        if let Some(bucket) = self.vertex_lookup.get(&hash) {
            let found = bucket.iter().copied().find(|&candidate| {
                let start = candidate as usize * stride;
                bits_equal(&self.vertices[start..start + stride], vertex)
            });
            if let Some(existing) = found {
                self.indices.push(existing);
                return Ok(existing);
            }
            log::trace!(
                "Vertex hash collision ({} candidates), storing new vertex",
                bucket.len()
            );
        }

        let vertex_count = self.vertex_count();
        let index = u32::try_from(vertex_count).map_err(|_| MeshError::IndexOutOfRange {
            index: vertex_count,
            len: u32::MAX as usize,
        })?;
        self.vertices.extend_from_slice(vertex);
        self.indices.push(index);
        self.vertex_lookup.entry(hash).or_default().push(index);
        Ok(index)
    }

    fn hash_vertex(&self, vertex: &[f32]) -> u64 {
        let mut state = self.hasher.build_hasher();
        for value in vertex {
            value.to_bits().hash(&mut state);
        }
        state.finish()
    }
}

impl<S> std::fmt::Debug for MeshBuilder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshBuilder")
            .field("schema", &self.schema.kinds())
            .field("floats", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .finish()
    }
}

/// Build a vertex by picking floats out of `values`.
///
/// Slot `i` of the result is `values[j]` for `mapping[i] == Some(j)`, and
/// `0.0` for `None`. A source index past the end of `values` fails with
/// [`MeshError::IndexOutOfRange`].
pub fn remap_vertex(mapping: &[Option<usize>], values: &[f32]) -> Result<Vec<f32>, MeshError> {
    mapping
        .iter()
        .map(|slot| match *slot {
            Some(source) => values
                .get(source)
                .copied()
                .ok_or(MeshError::IndexOutOfRange {
                    index: source,
                    len: values.len(),
                }),
            None => Ok(0.0),
        })
        .collect()
}

fn bits_equal(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}
