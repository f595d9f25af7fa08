//! Parametric mesh generation with solid and wireframe index lists
//!
//! Generators for three classic parametric solids: an axis-aligned cube,
//! a UV sphere, and a torus. Each is a stateless pure function returning
//! a [`MeshBundle`] of flat `f32` attribute buffers plus two `u32` index
//! lists over the same vertices: a triangle list for solid fills and a
//! line list for wireframe overlays. The buffers upload to a GPU as-is
//! through the byte-view accessors, and [`write_obj`] dumps a bundle as
//! Wavefront OBJ for offline viewing.
//!
//! # Example
//! ```
//! use wiremesh::generate_sphere;
//!
//! let bundle = generate_sphere(2.0, 20, 32)?;
//! assert_eq!(bundle.vertex_count(), 21 * 33);
//! assert!(bundle.is_consistent());
//! # Ok::<(), wiremesh::MeshError>(())
//! ```

mod bundle;
mod export;
mod grid;
mod primitives;

pub use bundle::{MeshBundle, MeshError};
pub use export::{write_obj, write_obj_to};
pub use primitives::{generate_cube, generate_sphere, generate_torus};
