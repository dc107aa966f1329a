//! Model descriptors and loading meshes through the virtual file system.
//!
//! A model is a small text descriptor naming an encoded mesh and a texture,
//! both relative to the descriptor's own folder:
//!
//! ```text
//! type: block
//! mesh: stone.vbmesh
//! texture: stone.png
//! blocks: 63
//! blockable: 63
//! ```

mod descriptor;
mod error;

use vmesh_vfs::{Vfs, path};

use crate::codec;
use crate::mesh::Mesh;
use crate::profiling::profile_function;

pub use descriptor::{ModelDescriptor, ModelKind, parse_key_values};
pub use error::{DescriptorError, ModelError};

/// A descriptor together with the mesh and texture bytes it references.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// The parsed descriptor.
    pub descriptor: ModelDescriptor,
    /// The decoded mesh.
    pub mesh: Mesh,
    /// Raw texture file contents, left for the caller to decode.
    pub texture_bytes: Vec<u8>,
}

/// Read and decode the mesh stored at `path`.
pub fn load_mesh(vfs: &Vfs, path: &str) -> Result<Mesh, ModelError> {
    profile_function!();
    let bytes = vfs.read(path)?;
    let mesh = codec::decode(&bytes)?;
    log::debug!("Loaded mesh '{path}' ({} bytes)", bytes.len());
    Ok(mesh)
}

/// Encode `mesh` and store it at `path`.
pub fn save_mesh(vfs: &Vfs, path: &str, mesh: &Mesh) -> Result<(), ModelError> {
    profile_function!();
    let bytes = codec::encode(mesh)?;
    vfs.write(path, &bytes)?;
    log::debug!("Saved mesh '{path}' ({} bytes)", bytes.len());
    Ok(())
}

/// Load the model described at `descriptor_path`.
///
/// The mesh and texture paths are resolved against the descriptor's folder.
pub fn load_model(vfs: &Vfs, descriptor_path: &str) -> Result<LoadedModel, ModelError> {
    profile_function!();
    let descriptor = ModelDescriptor::from_bytes(&vfs.read(descriptor_path)?)?;

    let mesh_path = path::resolve_sibling(descriptor_path, &descriptor.mesh_path)?;
    let texture_path = path::resolve_sibling(descriptor_path, &descriptor.texture_path)?;
    let mesh = load_mesh(vfs, &mesh_path)?;
    let texture_bytes = vfs.read(&texture_path)?;

    log::info!(
        "Loaded model '{descriptor_path}': {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(LoadedModel {
        descriptor,
        mesh,
        texture_bytes,
    })
}
