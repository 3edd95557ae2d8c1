//! Extraction front end: loads or synthesizes a scalar volume, extracts
//! the iso surface and writes the mesh as Wavefront OBJ or ASCII STL.

mod export;
mod volume;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use dualmc::{extract_surface, ExtractionOptions, QuadMesh, VolumeGrid, VolumeSample};
use volume::{AppVolume, Samples};

#[derive(Parser, Debug)]
#[command(name = "dualmc")]
#[command(about = "Extract an iso-surface quad mesh from a scalar volume", long_about = None)]
struct Cli {
    /// Raw volume file; 8- or 16-bit sample depth is inferred from the
    /// file size
    #[arg(long, conflicts_with_all = ["tensor", "caffeine"])]
    raw: Option<PathBuf>,

    /// Extents of the raw volume
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], requires = "raw")]
    dims: Option<Vec<i32>>,

    /// Text tensor file: three extents, min and max value, then the
    /// sample values (x fastest)
    #[arg(long, conflicts_with = "caffeine")]
    tensor: Option<PathBuf>,

    /// Generate the built-in caffeine molecule volume
    #[arg(long)]
    caffeine: bool,

    /// Normalized iso value in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    iso: f64,

    /// Use the manifold dual marching cubes correction
    #[arg(long)]
    manifold: bool,

    /// Generate a quad soup (no vertex sharing)
    #[arg(long)]
    soup: bool,

    /// Output file; the extension (.obj or .stl) selects the format
    #[arg(long, default_value = "surface.obj")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let volume = if cli.caffeine {
        AppVolume::caffeine()
    } else if let Some(path) = &cli.tensor {
        AppVolume::load_tensor(path)?
    } else if let Some(path) = &cli.raw {
        let dims = cli.dims.as_deref().context("--raw requires --dims X Y Z")?;
        AppVolume::load_raw(path, [dims[0], dims[1], dims[2]])?
    } else {
        bail!("no input volume; use --raw, --tensor or --caffeine");
    };

    let iso = if cli.iso.is_nan() { 0.0 } else { cli.iso };
    let options = ExtractionOptions {
        manifold: cli.manifold,
        quad_soup: cli.soup,
    };

    info!("computing iso surface at {}", iso);
    let start = Instant::now();
    let mesh = compute_surface(&volume, iso, options);
    info!(
        "extraction took {:.1} ms ({} vertices, {} quads)",
        start.elapsed().as_secs_f64() * 1e3,
        mesh.vertices.len(),
        mesh.quads.len()
    );

    let extension = cli
        .out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "obj" => export::write_obj(&cli.out, &mesh)?,
        "stl" => export::write_stl(&cli.out, &mesh)?,
        _ => bail!("output file {:?} is neither .obj nor .stl", cli.out),
    }

    Ok(())
}

/// Runs the extraction on whichever sample depth the volume holds. The
/// normalized iso value is mapped onto the sample range.
fn compute_surface(volume: &AppVolume, iso: f64, options: ExtractionOptions) -> QuadMesh {
    let [dim_x, dim_y, dim_z] = volume.dims;
    match &volume.samples {
        Samples::U8(data) => {
            let grid = VolumeGrid::new(data, dim_x, dim_y, dim_z);
            extract_surface(&grid, u8::from_normalized(iso), options)
        }
        Samples::U16(data) => {
            let grid = VolumeGrid::new(data, dim_x, dim_y, dim_z);
            extract_surface(&grid, u16::from_normalized(iso), options)
        }
    }
}
