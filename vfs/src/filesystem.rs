use std::path::PathBuf;

use crate::error::VfsError;
use crate::provider::VfsProvider;

/// Provider backed by a directory on the local filesystem.
///
/// The root is joined with the normalized VFS path to form the real path.
/// Traversal outside the root is impossible because the router rejects `..`
/// segments before a path reaches the provider.
///
/// # Example
///
/// ```ignore
/// let mut vfs = Vfs::new();
/// vfs.mount("assets", FileSystemProvider::new("./assets"));
///
/// // Reads ./assets/models/crate.vbmesh
/// let bytes = vfs.read("assets/models/crate.vbmesh")?;
/// ```
pub struct FileSystemProvider {
    root: PathBuf,
}

impl FileSystemProvider {
    /// Create a provider rooted at `root`.
    ///
    /// The directory does not need to exist until the first read or write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl VfsProvider for FileSystemProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        Ok(std::fs::read(self.resolve(path))?)
    }

    fn write(&self, path: &str, data: &[u8]) -> Result<(), VfsError> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vmesh_vfs_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn read_existing_file() {
        let dir = temp_dir("read");
        std::fs::write(dir.join("mesh.vbmesh"), b"hello").unwrap();

        let provider = FileSystemProvider::new(&dir);
        assert_eq!(provider.read("mesh.vbmesh").unwrap(), b"hello");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = temp_dir("read_missing");
        let provider = FileSystemProvider::new(&dir);
        assert!(matches!(
            provider.read("nope.vbmesh"),
            Err(VfsError::NotFound(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_creates_parent_folders() {
        let dir = temp_dir("write");
        let provider = FileSystemProvider::new(&dir);

        provider.write("models/crate/crate.vbmesh", b"data").unwrap();
        assert_eq!(
            std::fs::read(dir.join("models/crate/crate.vbmesh")).unwrap(),
            b"data"
        );

        assert_eq!(provider.read("models/crate/crate.vbmesh").unwrap(), b"data");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
