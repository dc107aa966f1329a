//! Error types for model descriptors and model loading.

use std::fmt;

use vmesh_vfs::VfsError;

use crate::error::MeshError;

/// Problems found in a model descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// A line is not a `key: value` pair, or the text is not UTF-8.
    Syntax(String),
    /// A required key is absent.
    MissingKey(&'static str),
    /// A value could not be parsed.
    InvalidValue {
        /// The key whose value is malformed.
        key: &'static str,
        /// The raw value.
        value: String,
    },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(msg) => write!(f, "descriptor syntax error: {msg}"),
            Self::MissingKey(key) => write!(f, "{key} parameter not specified"),
            Self::InvalidValue { key, value } => {
                write!(f, "unable to parse {key} parameter: \"{value}\"")
            }
        }
    }
}

impl std::error::Error for DescriptorError {}

/// Errors that can occur while loading or saving models and meshes.
#[derive(Debug)]
pub enum ModelError {
    /// Fetching or storing bytes failed.
    Vfs(VfsError),
    /// The mesh bytes are invalid.
    Mesh(MeshError),
    /// The descriptor is invalid.
    Descriptor(DescriptorError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vfs(e) => write!(f, "storage error: {e}"),
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
            Self::Descriptor(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vfs(e) => Some(e),
            Self::Mesh(e) => Some(e),
            Self::Descriptor(e) => Some(e),
        }
    }
}

impl From<VfsError> for ModelError {
    fn from(e: VfsError) -> Self {
        Self::Vfs(e)
    }
}

impl From<MeshError> for ModelError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}

impl From<DescriptorError> for ModelError {
    fn from(e: DescriptorError) -> Self {
        Self::Descriptor(e)
    }
}
