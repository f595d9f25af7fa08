//! wiremesh-export library
//!
//! Manifest parsing and the batch export driver, shared by the CLI binary
//! and its integration tests.

pub mod manifest;

pub use manifest::{ShapeManifest, check_all, export_all, generate_all};
