//! Path helpers shared by the router and by asset loaders.

use crate::VfsError;

/// Normalize a VFS path.
///
/// Backslashes become forward slashes, empty and `.` segments are dropped,
/// and leading/trailing slashes disappear. A `..` segment or a path with no
/// segments left yields [`VfsError::InvalidPath`].
pub fn normalize(path: &str) -> Result<String, VfsError> {
    let replaced = path.replace('\\', "/");
    let mut segments = Vec::new();

    for segment in replaced.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(VfsError::InvalidPath(
                    "path traversal (..) not allowed".into(),
                ));
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return Err(VfsError::InvalidPath("empty path".into()));
    }

    Ok(segments.join("/"))
}

/// Split a normalized path into its folder and file name.
///
/// The folder is empty for a single-segment path.
pub fn split_parent(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => ("", path),
    }
}

/// Resolve `relative` against the folder containing `sibling`.
///
/// Used to locate files referenced from a descriptor, which are named
/// relative to the descriptor itself.
pub fn resolve_sibling(sibling: &str, relative: &str) -> Result<String, VfsError> {
    let sibling = normalize(sibling)?;
    let (folder, _) = split_parent(&sibling);
    if folder.is_empty() {
        normalize(relative)
    } else {
        normalize(&format!("{folder}/{relative}"))
    }
}

/// Split a normalized path into source name and remainder.
pub(crate) fn split_source(path: &str) -> (&str, &str) {
    match path.find('/') {
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => (path, ""),
    }
}
