//! shapes.toml manifest parsing
//!
//! A manifest lists named shapes to export in one run, one `[[cube]]`,
//! `[[sphere]]`, or `[[torus]]` table per shape.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use wiremesh::{MeshBundle, generate_cube, generate_sphere, generate_torus, write_obj};

/// shapes.toml manifest structure
#[derive(Debug, Default, Deserialize)]
pub struct ShapeManifest {
    #[serde(default, rename = "cube")]
    pub cubes: Vec<CubeEntry>,
    #[serde(default, rename = "sphere")]
    pub spheres: Vec<SphereEntry>,
    #[serde(default, rename = "torus")]
    pub tori: Vec<TorusEntry>,
}

/// Cube entry; geometry fields default to the classic demo cube
#[derive(Debug, Deserialize)]
pub struct CubeEntry {
    pub name: String,
    /// Edge length. Default: 2.0
    #[serde(default = "default_side")]
    pub side: f32,
    /// Horizontal UV tiling factor. Default: 1.0
    #[serde(default = "default_tile")]
    pub u_tile: f32,
    /// Vertical UV tiling factor. Default: 1.0
    #[serde(default = "default_tile")]
    pub v_tile: f32,
}

fn default_side() -> f32 {
    2.0
}

fn default_tile() -> f32 {
    1.0
}

/// Sphere entry; resolutions below 2 on either axis fail at generation
#[derive(Debug, Deserialize)]
pub struct SphereEntry {
    pub name: String,
    pub radius: f32,
    pub u_segments: u32,
    pub v_segments: u32,
}

/// Torus entry; resolutions below 2 on either axis fail at generation
#[derive(Debug, Deserialize)]
pub struct TorusEntry {
    pub name: String,
    pub major_radius: f32,
    pub minor_radius: f32,
    pub u_segments: u32,
    pub v_segments: u32,
}

impl ShapeManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shapes.toml")
    }

    /// Total number of shape entries across all kinds
    pub fn shape_count(&self) -> usize {
        self.cubes.len() + self.spheres.len() + self.tori.len()
    }

    /// Check that the manifest is non-empty and names are usable
    ///
    /// Names become output file stems, so they must be non-empty and
    /// unique across all shape kinds.
    pub fn validate(&self) -> Result<()> {
        if self.shape_count() == 0 {
            bail!("Manifest lists no shapes");
        }

        let names = self
            .cubes
            .iter()
            .map(|c| c.name.as_str())
            .chain(self.spheres.iter().map(|s| s.name.as_str()))
            .chain(self.tori.iter().map(|t| t.name.as_str()));

        let mut seen: Vec<&str> = Vec::new();
        for name in names {
            if name.is_empty() {
                bail!("Shape entries need a non-empty name");
            }
            if seen.contains(&name) {
                bail!("Duplicate shape name '{}'", name);
            }
            seen.push(name);
        }

        Ok(())
    }
}

/// Generate every manifest entry, returning (name, bundle) pairs
///
/// Cubes come first, then spheres, then tori, each in manifest order.
/// The first entry with an invalid resolution aborts the run.
pub fn generate_all(manifest: &ShapeManifest) -> Result<Vec<(String, MeshBundle)>> {
    let mut bundles = Vec::with_capacity(manifest.shape_count());

    for cube in &manifest.cubes {
        let bundle = generate_cube(cube.side, cube.u_tile, cube.v_tile);
        bundles.push((cube.name.clone(), bundle));
    }

    for sphere in &manifest.spheres {
        let bundle = generate_sphere(sphere.radius, sphere.u_segments, sphere.v_segments)
            .with_context(|| format!("Failed to generate sphere '{}'", sphere.name))?;
        bundles.push((sphere.name.clone(), bundle));
    }

    for torus in &manifest.tori {
        let bundle = generate_torus(
            torus.major_radius,
            torus.minor_radius,
            torus.u_segments,
            torus.v_segments,
        )
        .with_context(|| format!("Failed to generate torus '{}'", torus.name))?;
        bundles.push((torus.name.clone(), bundle));
    }

    Ok(bundles)
}

/// Generate and write every manifest entry as `<name>.obj` under `out_dir`
pub fn export_all(manifest: &ShapeManifest, out_dir: &Path) -> Result<()> {
    for (name, bundle) in generate_all(manifest)? {
        if !bundle.is_consistent() {
            bail!("Generated mesh '{}' has inconsistent buffers", name);
        }

        let output = out_dir.join(format!("{}.obj", name));
        write_obj(&bundle, &output, &name)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        tracing::info!(
            "Exported '{}': {} vertices, {} triangles, {} wire edges -> {}",
            name,
            bundle.vertex_count(),
            bundle.triangle_count(),
            bundle.wire_edge_count(),
            output.display()
        );
    }

    Ok(())
}

/// Run every generator without writing, reporting per-shape counts
pub fn check_all(manifest: &ShapeManifest) -> Result<()> {
    for (name, bundle) in generate_all(manifest)? {
        if !bundle.is_consistent() {
            bail!("Generated mesh '{}' has inconsistent buffers", name);
        }

        tracing::info!(
            "'{}' ok: {} vertices, {} triangles, {} wire edges",
            name,
            bundle.vertex_count(),
            bundle.triangle_count(),
            bundle.wire_edge_count()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_minimal_cube() {
        let manifest = ShapeManifest::parse(
            r#"
[[cube]]
name = "demo-cube"
"#,
        )
        .unwrap();

        assert_eq!(manifest.shape_count(), 1);
        assert_eq!(manifest.cubes[0].name, "demo-cube");
        assert_eq!(manifest.cubes[0].side, 2.0);
        assert_eq!(manifest.cubes[0].u_tile, 1.0);
        assert_eq!(manifest.cubes[0].v_tile, 1.0);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_manifest_all_kinds() {
        let manifest = ShapeManifest::parse(
            r#"
[[cube]]
name = "box"
side = 1.0
u_tile = 3.0
v_tile = 2.0

[[sphere]]
name = "ball"
radius = 2.0
u_segments = 20
v_segments = 32

[[torus]]
name = "ring"
major_radius = 1.5
minor_radius = 0.45
u_segments = 60
v_segments = 20
"#,
        )
        .unwrap();

        assert_eq!(manifest.shape_count(), 3);
        assert_eq!(manifest.spheres[0].radius, 2.0);
        assert_eq!(manifest.spheres[0].v_segments, 32);
        assert_eq!(manifest.tori[0].minor_radius, 0.45);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_empty_manifest_fails_validation() {
        let manifest = ShapeManifest::parse("").unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_duplicate_names_fail_validation() {
        let manifest = ShapeManifest::parse(
            r#"
[[cube]]
name = "twin"

[[sphere]]
name = "twin"
radius = 1.0
u_segments = 4
v_segments = 4
"#,
        )
        .unwrap();

        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_generate_all_produces_bundles() {
        let manifest = ShapeManifest::parse(
            r#"
[[sphere]]
name = "ball"
radius = 2.0
u_segments = 4
v_segments = 4
"#,
        )
        .unwrap();

        let bundles = generate_all(&manifest).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].0, "ball");
        assert_eq!(bundles[0].1.vertex_count(), 25);
        assert!(bundles[0].1.is_consistent());
    }

    #[test]
    fn test_generate_all_rejects_low_resolution() {
        let manifest = ShapeManifest::parse(
            r#"
[[sphere]]
name = "flat"
radius = 2.0
u_segments = 1
v_segments = 5
"#,
        )
        .unwrap();

        assert!(generate_all(&manifest).is_err());
    }
}
