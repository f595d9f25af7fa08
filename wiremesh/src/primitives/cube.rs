//! Axis-aligned cube generator

use crate::bundle::MeshBundle;

/// Unit corner of each cube vertex, 4 per face in +X, -X, +Y, -Y, +Z, -Z
/// face order
///
/// Every corner appears on the three faces that share it, so faces keep
/// their own vertices and render with hard edges.
#[rustfmt::skip]
const CORNERS: [[f32; 3]; 24] = [
    [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], // +X
    [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], // -X
    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], // +Y
    [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], // -Y
    [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], // +Z
    [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], // -Z
];

/// Outward face normals in the same face order as [`CORNERS`]
const FACE_NORMALS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Wireframe line list over the cube vertices
///
/// Covers the top face ring, the bottom face ring, and the four vertical
/// edges, all through the top/bottom-face vertices (8-15). The side-face
/// duplicates of those corners carry no edges; the resulting edge count
/// is part of the cube's rendered look and must stay as is.
#[rustfmt::skip]
const WIRE_INDICES: [u32; 24] = [
    8, 9, 9, 11, 11, 10, 10, 8,     // top ring
    14, 15, 15, 13, 13, 12, 12, 14, // bottom ring
    11, 13, 9, 15, 8, 14, 10, 12,   // vertical edges
];

/// Generate an axis-aligned cube with per-face normals, octant debug
/// colors, and tiled UVs
///
/// # Arguments
/// * `side` - Edge length; the cube is centered at the origin
/// * `u_tile` - Horizontal UV tiling factor
/// * `v_tile` - Vertical UV tiling factor
///
/// # Returns
/// Bundle with 24 vertices (4 per face), 36 triangle indices, and a
/// 24-entry wireframe line list
///
/// Inputs are not validated; a negative `side` turns the cube inside out.
pub fn generate_cube(side: f32, u_tile: f32, v_tile: f32) -> MeshBundle {
    let half = side * 0.5;

    let mut bundle = MeshBundle::new();

    for corner in &CORNERS {
        bundle
            .positions
            .extend_from_slice(&[corner[0] * half, corner[1] * half, corner[2] * half]);

        // Debug palette: component is 1.0 where the corner coordinate is
        // positive, so shared corners keep one color across faces
        bundle
            .colors
            .extend_from_slice(&corner.map(|c| if c > 0.0 { 1.0 } else { 0.0 }));
    }

    for normal in &FACE_NORMALS {
        for _ in 0..4 {
            bundle.normals.extend_from_slice(normal);
        }

        // Face corners map to (0,v), (u,v), (0,0), (u,0)
        bundle
            .uvs
            .extend_from_slice(&[0.0, v_tile, u_tile, v_tile, 0.0, 0.0, u_tile, 0.0]);
    }

    // Two triangles per face (CCW winding viewed from outside)
    for face in 0..6u32 {
        let b = face * 4;
        bundle
            .indices
            .extend_from_slice(&[b, b + 2, b + 1, b + 2, b + 3, b + 1]);
    }

    bundle.wire_indices.extend_from_slice(&WIRE_INDICES);

    bundle
}
