//! Error types for mesh building and the binary mesh codec.

use std::fmt;

/// Reasons an encoded mesh buffer is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The header declares zero vertices.
    ZeroVertices,
    /// The header declares zero triangles.
    ZeroTriangles,
    /// The header declares zero attributes.
    ZeroAttributes,
    /// The buffer is shorter than the header and mandatory sections require.
    TooSmall {
        /// Bytes needed for the mandatory sections.
        required: u64,
        /// Bytes actually available.
        actual: u64,
    },
    /// An attribute code that names no known attribute kind.
    UnknownAttribute(u32),
    /// A triangle references a vertex past the end of the vertex data.
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: u32,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVertices => write!(f, "cannot have 0 vertices"),
            Self::ZeroTriangles => write!(f, "cannot have 0 triangles"),
            Self::ZeroAttributes => write!(f, "cannot have 0 attributes"),
            Self::TooSmall { required, actual } => {
                write!(f, "file too small: need {required} bytes, got {actual}")
            }
            Self::UnknownAttribute(code) => write!(f, "unknown attribute code {code}"),
            Self::IndexOutOfBounds {
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} out of bounds for {vertex_count} vertices"
            ),
        }
    }
}

/// Errors produced by the mesh builder, the mesh entity and the codec.
#[derive(Debug)]
pub enum MeshError {
    /// A vertex, mapping or buffer length disagrees with the schema.
    ShapeMismatch {
        /// What was being measured.
        what: &'static str,
        /// Length the schema requires.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// An index past the end of the addressed sequence.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the addressed sequence.
        len: usize,
    },
    /// The index buffer does not describe whole triangles.
    IncompleteTriangle {
        /// Number of indices recorded.
        index_count: usize,
    },
    /// An encoded buffer is malformed.
    Format(FormatError),
    /// The underlying reader or writer failed.
    Io(std::io::Error),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                what,
                expected,
                actual,
            } => write!(f, "shape mismatch: {what} expected {expected}, got {actual}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::IncompleteTriangle { index_count } => write!(
                f,
                "{index_count} indices do not form whole triangles"
            ),
            Self::Format(e) => write!(f, "invalid mesh data: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for MeshError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
