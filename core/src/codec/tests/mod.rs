use crate::attribute::AttributeSchema;
use crate::mesh::{Mesh, MeshBuilder};


/// Hand-assemble an encoded buffer, bypassing the encoder.
fn raw_buffer(
    vertex_count: u32,
    triangle_count: u32,
    codes: &[u32],
    floats: &[f32],
    indices: &[u32],
    trailer: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&vertex_count.to_le_bytes());
    out.extend_from_slice(&triangle_count.to_le_bytes());
    out.extend_from_slice(&(codes.len() as u32).to_le_bytes());
    for code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
    for value in floats {
        out.extend_from_slice(&value.to_le_bytes());
    }
    for index in indices {
        out.extend_from_slice(&index.to_le_bytes());
    }
    out.extend_from_slice(trailer);
    out
}

/// Two triangles sharing an edge, with position, normal and uv.
fn quad_mesh() -> Mesh {
    let mut builder = MeshBuilder::new(AttributeSchema::position_normal_uv());
    let corners = [
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        [1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0],
    ];
    for corner in [0, 1, 2, 2, 3, 0] {
        builder.add_vertex(&corners[corner]).unwrap();
    }
    builder.into_mesh().unwrap()
}
