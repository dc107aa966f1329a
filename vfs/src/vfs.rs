use std::collections::HashMap;
use std::sync::Arc;

use crate::error::VfsError;
use crate::path;
use crate::provider::VfsProvider;

/// Routes paths of the form `"source/rest/of/path"` to mounted providers.
///
/// The first path segment selects the provider. When it names no mounted
/// source, the default source (if set) receives the full path.
///
/// `Clone` is cheap and clones share the mounts. Mount everything before the
/// first clone.
///
/// # Example
///
/// ```ignore
/// let mut vfs = Vfs::new();
/// vfs.mount("assets", FileSystemProvider::new("./assets"));
/// vfs.mount("builtin", MemoryProvider::new());
/// vfs.set_default("assets");
///
/// let mesh = vfs.read("assets/models/crate.vbmesh")?;
/// let same = vfs.read("models/crate.vbmesh")?;
/// ```
#[derive(Clone, Default)]
pub struct Vfs {
    inner: Arc<VfsInner>,
}

#[derive(Default)]
struct VfsInner {
    sources: HashMap<String, Box<dyn VfsProvider>>,
    default_source: Option<String>,
}

impl Vfs {
    /// Create a router with no mounted sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `provider` under `name`, replacing any provider with that name.
    ///
    /// # Panics
    ///
    /// Panics if this `Vfs` has already been cloned.
    pub fn mount(&mut self, name: impl Into<String>, provider: impl VfsProvider) {
        let name = name.into();
        log::debug!("Mounting VFS source '{name}'");
        let inner = Arc::get_mut(&mut self.inner).expect("cannot mount after Vfs has been cloned");
        inner.sources.insert(name, Box::new(provider));
    }

    /// Set the source used when a path's first segment matches no mount.
    ///
    /// # Panics
    ///
    /// Panics if this `Vfs` has already been cloned.
    pub fn set_default(&mut self, name: impl Into<String>) {
        let inner =
            Arc::get_mut(&mut self.inner).expect("cannot set default after Vfs has been cloned");
        inner.default_source = Some(name.into());
    }

    /// Read the whole file at `raw_path`.
    pub fn read(&self, raw_path: &str) -> Result<Vec<u8>, VfsError> {
        let (provider, resolved) = self.resolve(raw_path)?;
        provider.read(&resolved)
    }

    /// Write `data` to `raw_path`.
    ///
    /// Fails with [`VfsError::ReadOnly`] when the resolved provider rejects writes.
    pub fn write(&self, raw_path: &str, data: &[u8]) -> Result<(), VfsError> {
        let (provider, resolved) = self.resolve(raw_path)?;
        provider.write(&resolved, data)
    }

    fn resolve(&self, raw_path: &str) -> Result<(&dyn VfsProvider, String), VfsError> {
        let normalized = path::normalize(raw_path)?;
        let (source, rest) = path::split_source(&normalized);

        if let Some(provider) = self.inner.sources.get(source) {
            return Ok((provider.as_ref(), rest.to_owned()));
        }

        if let Some(default_name) = &self.inner.default_source
            && let Some(provider) = self.inner.sources.get(default_name)
        {
            return Ok((provider.as_ref(), normalized));
        }

        Err(VfsError::NoSuchSource(source.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryProvider;

    /// Serves one fixed file and keeps the default `write`.
    struct Baked;

    impl VfsProvider for Baked {
        fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
            match path {
                "cube.vbmesh" => Ok(b"cube".to_vec()),
                _ => Err(VfsError::NotFound(path.to_owned())),
            }
        }
    }

    #[test]
    fn mount_and_read() {
        let mem = MemoryProvider::new();
        mem.insert("crate.vbmesh", b"mesh".to_vec());

        let mut vfs = Vfs::new();
        vfs.mount("models", mem);

        assert_eq!(vfs.read("models/crate.vbmesh").unwrap(), b"mesh");
    }

    #[test]
    fn default_source_fallback() {
        let mem = MemoryProvider::new();
        mem.insert("crate.vbmesh", b"mesh".to_vec());

        let mut vfs = Vfs::new();
        vfs.mount("models", mem);
        vfs.set_default("models");

        assert_eq!(vfs.read("crate.vbmesh").unwrap(), b"mesh");
    }

    #[test]
    fn unknown_source_without_default() {
        let vfs = Vfs::new();
        assert!(matches!(
            vfs.read("unknown/file.vmf"),
            Err(VfsError::NoSuchSource(_))
        ));
    }

    #[test]
    fn traversal_rejected() {
        let mut vfs = Vfs::new();
        vfs.mount("models", MemoryProvider::new());
        assert!(matches!(
            vfs.read("models/../secret"),
            Err(VfsError::InvalidPath(_))
        ));
    }

    #[test]
    fn write_then_read_back() {
        let mut vfs = Vfs::new();
        vfs.mount("out", MemoryProvider::new());

        vfs.write("out/a/b.vbmesh", b"data").unwrap();
        assert_eq!(vfs.read("out/a/b.vbmesh").unwrap(), b"data");
        assert_eq!(vfs.read("out//a/./b.vbmesh").unwrap(), b"data");
    }

    #[test]
    fn read_only_provider_rejects_writes() {
        let mut vfs = Vfs::new();
        vfs.mount("baked", Baked);

        assert_eq!(vfs.read("baked/cube.vbmesh").unwrap(), b"cube");
        assert!(matches!(
            vfs.write("baked/cube.vbmesh", b"1"),
            Err(VfsError::ReadOnly)
        ));
    }

    #[test]
    fn clones_share_mounts() {
        let mem = MemoryProvider::new();
        mem.insert("a.vmf", b"1".to_vec());

        let mut vfs = Vfs::new();
        vfs.mount("m", mem);

        let shared = vfs.clone();
        assert_eq!(shared.read("m/a.vmf").unwrap(), b"1");
    }
}
