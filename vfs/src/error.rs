use std::fmt;

/// Errors raised while fetching or storing asset bytes.
#[derive(Debug)]
pub enum VfsError {
    /// Nothing is stored at the requested path.
    NotFound(String),
    /// The underlying storage failed.
    Io(std::io::Error),
    /// The path is empty or tries to escape its source with `..`.
    InvalidPath(String),
    /// No provider is mounted under the given source name.
    NoSuchSource(String),
    /// The provider does not accept writes.
    ReadOnly,
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound(path) => write!(f, "not found: {path}"),
            VfsError::Io(err) => write!(f, "IO error: {err}"),
            VfsError::InvalidPath(reason) => write!(f, "invalid path: {reason}"),
            VfsError::NoSuchSource(name) => write!(f, "no such source: {name}"),
            VfsError::ReadOnly => write!(f, "provider is read-only"),
        }
    }
}

impl std::error::Error for VfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VfsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VfsError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            VfsError::NotFound(err.to_string())
        } else {
            VfsError::Io(err)
        }
    }
}
