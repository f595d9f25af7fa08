//! wiremesh-export - parametric mesh export tool
//!
//! Generates cube, sphere, and torus bundles and writes them as Wavefront
//! OBJ files (solid triangles plus `l` wireframe elements), one shape per
//! invocation or a whole shapes.toml manifest at once.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use wiremesh::{MeshBundle, generate_cube, generate_sphere, generate_torus, write_obj};
use wiremesh_export::manifest::{self, ShapeManifest};

#[derive(Parser)]
#[command(name = "wiremesh-export")]
#[command(about = "Parametric mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a cube mesh
    Cube {
        /// Edge length
        #[arg(long, default_value_t = 2.0)]
        side: f32,

        /// Horizontal UV tiling factor
        #[arg(long, default_value_t = 1.0)]
        u_tile: f32,

        /// Vertical UV tiling factor
        #[arg(long, default_value_t = 1.0)]
        v_tile: f32,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a UV sphere mesh
    Sphere {
        /// Sphere radius
        #[arg(long, default_value_t = 2.0)]
        radius: f32,

        /// Polar divisions, pole to pole (min 2)
        #[arg(long, default_value_t = 20)]
        u_segments: u32,

        /// Azimuthal divisions (min 2)
        #[arg(long, default_value_t = 32)]
        v_segments: u32,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a torus mesh
    Torus {
        /// Distance from torus center to tube center
        #[arg(long, default_value_t = 1.5)]
        major_radius: f32,

        /// Tube radius
        #[arg(long, default_value_t = 0.45)]
        minor_radius: f32,

        /// Segments around the sweep circle (min 2)
        #[arg(long, default_value_t = 60)]
        u_segments: u32,

        /// Segments around the tube cross-section (min 2)
        #[arg(long, default_value_t = 20)]
        v_segments: u32,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every shape listed in a manifest file
    Batch {
        /// Path to shapes.toml manifest
        #[arg(default_value = "shapes.toml")]
        manifest: PathBuf,

        /// Output directory for the generated .obj files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Validate a manifest and dry-run its generators without writing
    Check {
        /// Path to shapes.toml manifest
        #[arg(default_value = "shapes.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cube {
            side,
            u_tile,
            v_tile,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from("cube.obj"));
            export_single(&generate_cube(side, u_tile, v_tile), "cube", &output)?;
        }

        Commands::Sphere {
            radius,
            u_segments,
            v_segments,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from("sphere.obj"));
            let bundle = generate_sphere(radius, u_segments, v_segments)
                .context("Sphere generation failed")?;
            export_single(&bundle, "sphere", &output)?;
        }

        Commands::Torus {
            major_radius,
            minor_radius,
            u_segments,
            v_segments,
            output,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from("torus.obj"));
            let bundle = generate_torus(major_radius, minor_radius, u_segments, v_segments)
                .context("Torus generation failed")?;
            export_single(&bundle, "torus", &output)?;
        }

        Commands::Batch { manifest, out_dir } => {
            tracing::info!("Exporting shapes from {:?}", manifest);
            let config = ShapeManifest::load(&manifest)?;
            config.validate()?;
            manifest::export_all(&config, &out_dir)?;
            tracing::info!("Batch export complete!");
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = ShapeManifest::load(&manifest)?;
            config.validate()?;
            manifest::check_all(&config)?;
            tracing::info!("Manifest is valid!");
        }
    }

    Ok(())
}

/// Write one bundle and log its buffer counts
fn export_single(bundle: &MeshBundle, name: &str, output: &Path) -> Result<()> {
    anyhow::ensure!(
        bundle.is_consistent(),
        "Generated {} mesh has inconsistent buffers",
        name
    );

    write_obj(bundle, output, name)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Exported {}: {} vertices, {} triangles, {} wire edges -> {}",
        name,
        bundle.vertex_count(),
        bundle.triangle_count(),
        bundle.wire_edge_count(),
        output.display()
    );

    Ok(())
}
