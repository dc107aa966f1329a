use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::VfsError;
use crate::provider::VfsProvider;

/// In-memory provider for tests and assets baked into the binary.
///
/// Cloning shares the same storage, so a clone kept outside the [`Vfs`](crate::Vfs)
/// can keep inserting files after the first one has been mounted.
///
/// # Example
///
/// ```ignore
/// let mem = MemoryProvider::new();
/// mem.insert("crate/crate.vmf", descriptor_text.into_bytes());
/// mem.insert("crate/crate.vbmesh", encoded_mesh);
///
/// let mut vfs = Vfs::new();
/// vfs.mount("builtin", mem);
/// ```
#[derive(Clone, Default)]
pub struct MemoryProvider {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryProvider {
    /// Create an empty in-memory provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` at `path`, replacing any previous file.
    ///
    /// The path should use forward slashes and have no leading slash.
    pub fn insert(&self, path: impl Into<String>, data: Vec<u8>) {
        self.files.write().insert(path.into(), data);
    }
}

impl VfsProvider for MemoryProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(path.to_owned()))
    }

    fn write(&self, path: &str, data: &[u8]) -> Result<(), VfsError> {
        self.files.write().insert(path.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_existing_file() {
        let mem = MemoryProvider::new();
        mem.insert("cube.vbmesh", vec![1, 2, 3]);
        assert_eq!(mem.read("cube.vbmesh").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn read_missing_file() {
        let mem = MemoryProvider::new();
        assert!(matches!(mem.read("nope.vbmesh"), Err(VfsError::NotFound(_))));
    }

    #[test]
    fn write_overwrites() {
        let mem = MemoryProvider::new();
        mem.write("out.vbmesh", b"old").unwrap();
        mem.write("out.vbmesh", b"new").unwrap();
        assert_eq!(mem.read("out.vbmesh").unwrap(), b"new");
    }

    #[test]
    fn clones_share_storage() {
        let mem = MemoryProvider::new();
        let other = mem.clone();
        other.insert("late.vmf", b"x".to_vec());
        assert_eq!(mem.read("late.vmf").unwrap(), b"x");
    }
}
