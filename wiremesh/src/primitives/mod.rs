//! Parametric solid generators
//!
//! Each generator is a stateless pure function returning a fresh
//! [`MeshBundle`](crate::MeshBundle). The cube has fixed topology; sphere
//! and torus sample a parameter grid and share the same triangulation
//! and wireframe rules.

mod cube;
mod sphere;
mod torus;


pub use cube::generate_cube;
pub use sphere::generate_sphere;
pub use torus::generate_torus;
