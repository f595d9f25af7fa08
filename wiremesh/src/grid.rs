//! Row-major grid topology shared by the grid-based generators
//!
//! Sphere and torus both sample a `(u_segments + 1) × (v_segments + 1)`
//! point grid and share the same triangulation and wireframe rules.

use crate::bundle::MeshBundle;

/// Flat vertex index of grid point (i, j); rows are `v_segments + 1` wide
#[inline]
pub(crate) fn grid_index(i: u32, j: u32, v_segments: u32) -> u32 {
    i * (v_segments + 1) + j
}

/// Emit triangle and wireframe indices for every quad of the grid
///
/// Quad (i, j) has corners i0=(i,j), i1=(i,j+1), i2=(i+1,j+1), i3=(i+1,j)
/// and always splits along the i0-i2 diagonal. The wireframe takes only
/// the two forward edges (i0,i1) and (i0,i3); edges shared with the next
/// quad are never emitted twice, and the far row/column boundary stays
/// open.
pub(crate) fn emit_quad_grid(bundle: &mut MeshBundle, u_segments: u32, v_segments: u32) {
    for i in 0..u_segments {
        for j in 0..v_segments {
            let i0 = grid_index(i, j, v_segments);
            let i1 = grid_index(i, j + 1, v_segments);
            let i2 = grid_index(i + 1, j + 1, v_segments);
            let i3 = grid_index(i + 1, j, v_segments);

            // Two triangles per quad, fixed diagonal through i0-i2
            bundle.indices.extend_from_slice(&[i0, i1, i2, i2, i3, i0]);

            // One forward edge along each parameter direction
            bundle.wire_indices.extend_from_slice(&[i0, i1, i0, i3]);
        }
    }
}
