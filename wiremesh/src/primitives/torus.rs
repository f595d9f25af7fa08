//! Torus generator with finite-difference normals

use glam::Vec3;
use std::f32::consts::PI;

use crate::bundle::{MeshBundle, MeshError};
use crate::grid::emit_quad_grid;

/// Point on the torus at sweep angle `du` and cross-section angle `dv`
#[inline]
fn torus_point(major_radius: f32, minor_radius: f32, du: f32, dv: f32) -> Vec3 {
    let ring = major_radius + minor_radius * dv.cos();
    Vec3::new(ring * du.cos(), minor_radius * dv.sin(), -ring * du.sin())
}

/// Normal at (du, dv) estimated from finite-difference tangents
///
/// Each tangent samples a second point offset by `eps` along one
/// parameter: backward when `angle - eps` stays non-negative, forward at
/// the angle origin, with the difference always oriented toward growing
/// angle. The cross product order (dv-tangent crossed with du-tangent)
/// fixes the orientation convention and must not be swapped.
fn estimate_normal(major_radius: f32, minor_radius: f32, du: f32, dv: f32, eps: f32) -> Vec3 {
    let point = torus_point(major_radius, minor_radius, du, dv);

    let tangent_u = if du - eps >= 0.0 {
        point - torus_point(major_radius, minor_radius, du - eps, dv)
    } else {
        torus_point(major_radius, minor_radius, du + eps, dv) - point
    };

    let tangent_v = if dv - eps >= 0.0 {
        point - torus_point(major_radius, minor_radius, du, dv - eps)
    } else {
        torus_point(major_radius, minor_radius, du, dv + eps) - point
    };

    tangent_v.cross(tangent_u).normalize()
}

/// Generate a torus swept around the Y axis
///
/// # Arguments
/// * `major_radius` - Distance from torus center to tube center
/// * `minor_radius` - Tube radius
/// * `u_segments` - Segments around the sweep circle (min 2)
/// * `v_segments` - Segments around the tube cross-section (min 2)
///
/// # Returns
/// Bundle with `(u_segments + 1) × (v_segments + 1)` vertices and no UV
/// attribute, or [`MeshError::InvalidResolution`] when either segment
/// count is below 2
///
/// Normals are numerical estimates, unit length and pointing from each
/// vertex toward the tube's center circle, accurate to visual tolerance
/// at typical segment counts. Radii are not validated.
pub fn generate_torus(
    major_radius: f32,
    minor_radius: f32,
    u_segments: u32,
    v_segments: u32,
) -> Result<MeshBundle, MeshError> {
    if u_segments < 2 || v_segments < 2 {
        return Err(MeshError::InvalidResolution {
            u_segments,
            v_segments,
        });
    }

    // Angular step for tangent estimation, scaled to the tube resolution
    let eps = 0.01 * 2.0 * PI / v_segments as f32;

    let mut bundle = MeshBundle::new();

    for i in 0..=u_segments {
        let du = (i as f32 / u_segments as f32) * 2.0 * PI;
        for j in 0..=v_segments {
            let dv = (j as f32 / v_segments as f32) * 2.0 * PI;

            let position = torus_point(major_radius, minor_radius, du, dv);
            let normal = estimate_normal(major_radius, minor_radius, du, dv, eps);

            bundle.push_vertex(position, normal);
        }
    }

    emit_quad_grid(&mut bundle, u_segments, v_segments);

    Ok(bundle)
}
