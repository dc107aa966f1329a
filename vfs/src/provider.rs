use crate::VfsError;

/// A storage backend that hands out whole files as byte buffers.
///
/// Paths passed to a provider are already normalized by the [`Vfs`](crate::Vfs)
/// router: forward slashes, no leading or trailing slash, no `.` or `..`
/// segments, and the source prefix stripped.
pub trait VfsProvider: Send + Sync + 'static {
    /// Read the entire contents of the file at `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError>;

    /// Create or overwrite the file at `path`.
    ///
    /// Providers that only serve reads keep this default, which fails with
    /// [`VfsError::ReadOnly`].
    fn write(&self, _path: &str, _data: &[u8]) -> Result<(), VfsError> {
        Err(VfsError::ReadOnly)
    }
}
