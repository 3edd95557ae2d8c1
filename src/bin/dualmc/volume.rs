//! Volume input for the front end: raw sample files, text tensor files and
//! the synthetic caffeine dataset.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};

/// Sample buffer at one of the two supported bit depths.
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

/// A loaded or generated volume, ready to be wrapped in a grid view.
pub struct AppVolume {
    pub dims: [i32; 3],
    pub samples: Samples,
}

impl AppVolume {
    /// Loads a headerless raw volume. The sample depth is inferred from the
    /// file size: one byte per sample is 8-bit, two bytes (little endian)
    /// is 16-bit; anything else is rejected.
    pub fn load_raw(path: &Path, dims: [i32; 3]) -> Result<Self> {
        info!("loading raw file {:?}", path);

        if dims.iter().any(|&d| d < 1) {
            bail!("invalid raw volume extents {:?}", dims);
        }
        let num_samples = dims.iter().map(|&d| d as u64).product::<u64>();
        // the engine linearizes cell ids in 32 bits
        if num_samples >= u64::from(u32::MAX) {
            bail!("volume of {} samples is too large", num_samples);
        }

        let bytes = fs::read(path).with_context(|| format!("failed to read {:?}", path))?;
        let samples = if bytes.len() as u64 == num_samples {
            Samples::U8(bytes)
        } else if bytes.len() as u64 == 2 * num_samples {
            info!("assuming 16-bit raw file");
            let wide = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            Samples::U16(wide)
        } else {
            bail!(
                "file size {} is inconsistent with extents {:?}",
                bytes.len(),
                dims
            );
        };

        Ok(Self { dims, samples })
    }

    /// Loads a text tensor file: three integer extents, the minimum and
    /// maximum value, then dimX * dimY * dimZ floats (x fastest), rescaled
    /// from [min, max] to the full 16-bit range.
    pub fn load_tensor(path: &Path) -> Result<Self> {
        info!("loading tensor file {:?}", path);

        let text = fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let mut tokens = text.split_whitespace();
        let mut next = |what: &str| {
            tokens
                .next()
                .with_context(|| format!("tensor file ended before {}", what))
        };

        let dims: [i32; 3] = [
            next("dimX")?.parse().context("bad dimX")?,
            next("dimY")?.parse().context("bad dimY")?,
            next("dimZ")?.parse().context("bad dimZ")?,
        ];
        if dims.iter().any(|&d| d < 1) {
            bail!("invalid tensor extents {:?}", dims);
        }
        let num_samples = dims.iter().map(|&d| d as u64).product::<u64>();
        if num_samples >= u64::from(u32::MAX) {
            bail!("volume of {} samples is too large", num_samples);
        }

        let min: f64 = next("minimum value")?.parse().context("bad minimum")?;
        let max: f64 = next("maximum value")?.parse().context("bad maximum")?;
        if max <= min {
            bail!("tensor value range [{}, {}] is empty", min, max);
        }
        let scale = 1.0 / (max - min);

        let mut data = Vec::with_capacity(num_samples as usize);
        let mut out_of_range = 0usize;
        for i in 0..num_samples {
            let value: f64 = next("sample values")?
                .parse()
                .with_context(|| format!("bad sample value at index {}", i))?;
            if value < min || value > max {
                out_of_range += 1;
            }
            let normalized = ((value - min) * scale).clamp(0.0, 1.0);
            data.push((normalized * f64::from(u16::MAX)) as u16);
        }
        if out_of_range > 0 {
            warn!("{} tensor values were outside [{}, {}]", out_of_range, min, max);
        }

        Ok(Self {
            dims,
            samples: Samples::U16(data),
        })
    }

    /// Generates the synthetic caffeine volume: a 128-cubed 16-bit grid of
    /// electron density approximated by radial Gaussians at the molecule's
    /// atom sites.
    pub fn caffeine() -> Self {
        info!("generating caffeine volume");

        const DIM: i32 = 128;
        // saturates the density field before quantization
        const POST_DENSITY_SCALE: f64 = 2.5;

        let atoms = caffeine_atoms();
        let inv_dim = 1.0 / f64::from(DIM - 1);

        let mut data = Vec::with_capacity((DIM * DIM * DIM) as usize);
        for z in 0..DIM {
            let nz = f64::from(z) * inv_dim;
            for y in 0..DIM {
                let ny = f64::from(y) * inv_dim;
                for x in 0..DIM {
                    let nx = f64::from(x) * inv_dim;
                    let rho: f64 = atoms.iter().map(|atom| atom.eval(nx, ny, nz)).sum();
                    let density = (rho * POST_DENSITY_SCALE).min(1.0);
                    data.push((density * f64::from(u16::MAX)) as u16);
                }
            }
        }

        Self {
            dims: [DIM, DIM, DIM],
            samples: Samples::U16(data),
        }
    }
}

/// A spherically symmetric Gaussian density blob.
struct RadialGaussian {
    center: [f64; 3],
    normalization: f64,
    falloff: f64,
}

impl RadialGaussian {
    fn new(center: [f64; 3], variance: f64) -> Self {
        Self {
            center,
            normalization: 1.0 / (std::f64::consts::TAU * variance).sqrt(),
            falloff: -0.5 / variance,
        }
    }

    fn eval(&self, x: f64, y: f64, z: f64) -> f64 {
        let dx = x - self.center[0];
        let dy = y - self.center[1];
        let dz = z - self.center[2];
        let d_squared = dx * dx + dy * dy + dz * dz;
        self.normalization * (self.falloff * d_squared).exp()
    }
}

/// The 24 atom sites of the caffeine molecule (structure from PubChem,
/// compound 2519), scaled into the unit cube, with per-element variances
/// derived from covalent radii.
fn caffeine_atoms() -> Vec<RadialGaussian> {
    // element order: hydrogen, carbon, nitrogen, oxygen
    const RADII: [f64; 4] = [25.0, 70.0, 65.0, 60.0];
    const BASE_VARIANCE: f64 = 0.025 * 0.025 / (70.0 * 70.0);
    const HYDROGEN: usize = 0;
    const CARBON: usize = 1;
    const NITROGEN: usize = 2;
    const OXYGEN: usize = 3;

    // (x, y, z, element), in molecule coordinates
    const SITES: [(f64, f64, f64, usize); 24] = [
        (0.4700, 2.5688, 0.0006, OXYGEN),
        (-3.1271, -0.4436, -0.0003, OXYGEN),
        (-0.9686, -1.3125, 0.0000, NITROGEN),
        (2.2182, 0.1412, -0.0003, NITROGEN),
        (-1.3477, 1.0797, -0.0001, NITROGEN),
        (1.4119, -1.9372, 0.0002, NITROGEN),
        (0.8579, 0.2592, -0.0008, CARBON),
        (0.3897, -1.0264, -0.0004, CARBON),
        (-1.9061, -0.2495, -0.0004, CARBON),
        (0.0307, 1.4220, -0.0006, CARBON),
        (2.5032, -1.1998, 0.0003, CARBON),
        (-1.4276, -2.6960, 0.0008, CARBON),
        (3.1926, 1.2061, 0.0003, CARBON),
        (-2.2969, 2.1881, 0.0007, CARBON),
        (3.5163, -1.5787, 0.0008, HYDROGEN),
        (-1.0451, -3.1973, -0.8937, HYDROGEN),
        (-2.5186, -2.7596, 0.0011, HYDROGEN),
        (-1.0447, -3.1963, 0.8957, HYDROGEN),
        (4.1992, 0.7801, 0.0002, HYDROGEN),
        (3.0468, 1.8092, -0.8992, HYDROGEN),
        (3.0466, 1.8083, 0.9004, HYDROGEN),
        (-1.8087, 3.1651, -0.0003, HYDROGEN),
        (-2.9322, 2.1027, 0.8881, HYDROGEN),
        (-2.9346, 2.1021, -0.8849, HYDROGEN),
    ];

    // molecule scale and offset into the unit cube
    const SCALE: f64 = 0.1;
    const OFFSET: f64 = 0.5;

    SITES
        .iter()
        .map(|&(x, y, z, element)| {
            let radius = RADII[element];
            RadialGaussian::new(
                [
                    x * SCALE + OFFSET,
                    y * SCALE + OFFSET,
                    z * SCALE + OFFSET,
                ],
                radius * radius * BASE_VARIANCE,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caffeine_volume_is_plausible() {
        let volume = AppVolume::caffeine();
        assert_eq!(volume.dims, [128, 128, 128]);
        let Samples::U16(data) = &volume.samples else {
            panic!("caffeine volume should be 16-bit");
        };
        assert_eq!(data.len(), 128 * 128 * 128);
        // density peaks at the atom sites and vanishes at the borders
        assert!(data.iter().any(|&s| s > u16::MAX / 2));
        assert_eq!(data[0], 0);
    }
}
