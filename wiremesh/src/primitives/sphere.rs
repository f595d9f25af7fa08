//! UV sphere generator

use glam::Vec3;
use std::f32::consts::PI;

use crate::bundle::{MeshBundle, MeshError};
use crate::grid::emit_quad_grid;

/// Point on the sphere at polar angle `theta` and azimuth `phi`
#[inline]
fn sphere_point(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.cos(),
        -radius * theta.sin() * phi.sin(),
    )
}

/// Generate a UV sphere from a latitude/longitude grid
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `u_segments` - Polar divisions, pole to pole (min 2)
/// * `v_segments` - Azimuthal divisions around the Y axis (min 2)
///
/// # Returns
/// Bundle with `(u_segments + 1) × (v_segments + 1)` vertices, exact
/// radial normals, and `(i/u, j/v)` UVs, or
/// [`MeshError::InvalidResolution`] when either segment count is below 2
///
/// The rows at `i = 0` and `i = u_segments` collapse onto the poles;
/// those duplicate vertices are part of the parameterization. The radius
/// is not validated; a negative radius inverts surface and normals
/// together.
pub fn generate_sphere(
    radius: f32,
    u_segments: u32,
    v_segments: u32,
) -> Result<MeshBundle, MeshError> {
    if u_segments < 2 || v_segments < 2 {
        return Err(MeshError::InvalidResolution {
            u_segments,
            v_segments,
        });
    }

    let mut bundle = MeshBundle::new();

    // Generate vertices row by row, poles included
    for i in 0..=u_segments {
        let theta = (i as f32 / u_segments as f32) * PI; // 0 to PI, pole to pole
        for j in 0..=v_segments {
            let phi = (j as f32 / v_segments as f32) * 2.0 * PI; // 0 to 2PI around Y

            let position = sphere_point(radius, theta, phi);

            bundle.push_vertex(position, position / radius);
            bundle.push_uv(i as f32 / u_segments as f32, j as f32 / v_segments as f32);
        }
    }

    emit_quad_grid(&mut bundle, u_segments, v_segments);

    Ok(bundle)
}
