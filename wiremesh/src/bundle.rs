//! Mesh bundle types
//!
//! Shared output type for the parametric generators: flat f32 attribute
//! buffers plus two u32 index lists (triangle fill and wireframe lines)
//! over the same vertices.

use bytemuck::cast_slice;
use glam::Vec3;
use thiserror::Error;

/// Errors produced by the grid-based generators
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// Segment counts below 2 on either axis cannot form a surface
    #[error("Invalid grid resolution {u_segments}x{v_segments}: both axes need at least 2 segments")]
    InvalidResolution { u_segments: u32, v_segments: u32 },
}

/// Generated mesh data in flat f32 format
///
/// Attribute buffers are parallel: index `i` addresses `positions[i*3..]`,
/// `normals[i*3..]`, `colors[i*3..]`, and `uvs[i*2..]`. A generator that
/// does not produce an attribute leaves its buffer empty. `indices` is a
/// triangle list and `wire_indices` a line list; both index the same
/// vertices, so a renderer can bind one vertex buffer and switch index
/// buffers between solid and wireframe draws.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBundle {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<f32>,
    /// Vertex normals as [x, y, z] (empty if no normals)
    pub normals: Vec<f32>,
    /// Vertex colors as [r, g, b] (empty if no colors)
    pub colors: Vec<f32>,
    /// UV coordinates as [u, v] (empty if no UVs)
    pub uvs: Vec<f32>,
    /// Triangle list indices
    pub indices: Vec<u32>,
    /// Line list indices for wireframe draws
    pub wire_indices: Vec<u32>,
}

impl MeshBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            wire_indices: Vec::new(),
        }
    }

    /// Append a vertex position and normal
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) {
        self.positions
            .extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
    }

    /// Append a UV coordinate pair
    pub fn push_uv(&mut self, u: f32, v: f32) {
        self.uvs.extend_from_slice(&[u, v]);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get wireframe edge count
    pub fn wire_edge_count(&self) -> usize {
        self.wire_indices.len() / 2
    }

    /// Position data as raw bytes for vertex buffer upload
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normal data as raw bytes
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// Color data as raw bytes
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(&self.colors)
    }

    /// UV data as raw bytes
    pub fn uv_bytes(&self) -> &[u8] {
        cast_slice(&self.uvs)
    }

    /// Triangle index data as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Wireframe index data as raw bytes
    pub fn wire_index_bytes(&self) -> &[u8] {
        cast_slice(&self.wire_indices)
    }

    /// Check buffer length and index bound invariants
    ///
    /// Every non-empty attribute buffer must cover the same vertex count,
    /// the triangle list length must be a multiple of 3, the line list a
    /// multiple of 2, and every index must address an existing vertex.
    pub fn is_consistent(&self) -> bool {
        if self.positions.len() % 3 != 0 {
            return false;
        }
        let vertex_count = self.vertex_count();

        if !self.normals.is_empty() && self.normals.len() != vertex_count * 3 {
            return false;
        }
        if !self.colors.is_empty() && self.colors.len() != vertex_count * 3 {
            return false;
        }
        if !self.uvs.is_empty() && self.uvs.len() != vertex_count * 2 {
            return false;
        }

        if self.indices.len() % 3 != 0 || self.wire_indices.len() % 2 != 0 {
            return false;
        }

        self.indices.iter().all(|&i| (i as usize) < vertex_count)
            && self
                .wire_indices
                .iter()
                .all(|&i| (i as usize) < vertex_count)
    }
}

impl Default for MeshBundle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle_is_consistent() {
        let bundle = MeshBundle::new();
        assert_eq!(bundle.vertex_count(), 0);
        assert_eq!(bundle.triangle_count(), 0);
        assert_eq!(bundle.wire_edge_count(), 0);
        assert!(bundle.is_consistent());
    }

    #[test]
    fn test_push_vertex_extends_parallel_buffers() {
        let mut bundle = MeshBundle::new();
        bundle.push_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
        bundle.push_uv(0.25, 0.75);

        assert_eq!(bundle.vertex_count(), 1);
        assert_eq!(bundle.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(bundle.normals, vec![0.0, 1.0, 0.0]);
        assert_eq!(bundle.uvs, vec![0.25, 0.75]);
        assert!(bundle.is_consistent());
    }

    #[test]
    fn test_out_of_bounds_index_fails_consistency() {
        let mut bundle = MeshBundle::new();
        bundle.push_vertex(Vec3::ZERO, Vec3::Y);
        bundle.push_vertex(Vec3::X, Vec3::Y);
        bundle.push_vertex(Vec3::Z, Vec3::Y);
        bundle.indices.extend_from_slice(&[0, 1, 3]);
        assert!(!bundle.is_consistent());

        bundle.indices[2] = 2;
        assert!(bundle.is_consistent());

        bundle.wire_indices.extend_from_slice(&[2, 5]);
        assert!(!bundle.is_consistent());
    }

    #[test]
    fn test_mismatched_attribute_length_fails_consistency() {
        let mut bundle = MeshBundle::new();
        bundle.push_vertex(Vec3::ZERO, Vec3::Y);
        bundle.push_vertex(Vec3::X, Vec3::Y);
        bundle.push_uv(0.0, 0.0); // only one UV for two vertices
        assert!(!bundle.is_consistent());

        bundle.push_uv(1.0, 0.0);
        assert!(bundle.is_consistent());
    }

    #[test]
    fn test_byte_views_cover_buffers() {
        let mut bundle = MeshBundle::new();
        bundle.push_vertex(Vec3::ONE, Vec3::X);
        bundle.indices.extend_from_slice(&[0, 0, 0]);

        assert_eq!(bundle.position_bytes().len(), 3 * 4);
        assert_eq!(bundle.normal_bytes().len(), 3 * 4);
        assert_eq!(bundle.index_bytes().len(), 3 * 4);
        assert!(bundle.color_bytes().is_empty());
        assert!(bundle.uv_bytes().is_empty());
        assert!(bundle.wire_index_bytes().is_empty());
    }
}
