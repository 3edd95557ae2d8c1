//! Derives the two dual marching cubes lookup tables from first principles.
//!
//! The dual-point table is found by splitting each cube configuration's
//! inside corners into connected components over the cube-edge graph and
//! collecting, per component, the edges that cross over to an outside
//! corner. The manifold table enumerates all rotations of the two cube
//! classes with an ambiguous face (Nielson's C16 and C19) and records the
//! direction of that face.
//!
//! The compiled tables in [`crate::tables`] are the output of this module;
//! the `gentables` binary regenerates that file via [`write_tables_source`].

use std::io::{self, Write};

use log::info;

use crate::cube::{Corner, CubeConfig, EdgeMask, FaceDir, CORNER_EDGES};
use crate::tables::NO_AMBIGUOUS_FACE;

/// Configurations whose connected-component traversal would merge two
/// distinct marching cubes patches into one. They cross the same edges as
/// their complements, which partition the edges correctly.
const MERGED_PATCH_CONFIGS: [u8; 4] = [126, 189, 219, 231];

/// Derive the dual-point table: for each of the 256 cube configurations, up
/// to four 12-bit edge masks, one per dual point, zero-padded.
pub fn dual_points_table() -> [[u16; 4]; 256] {
    info!("deriving dual marching cubes table");

    let mut table = [[0u16; 4]; 256];
    let mut stack: Vec<Corner> = Vec::with_capacity(8);

    // configurations 0 and 255 cross no edges; their rows stay zero
    for cube in 1..255usize {
        let mut config = CubeConfig::new(cube as u8);
        if MERGED_PATCH_CONFIGS.contains(&config.bits()) {
            config = CubeConfig::new(!config.bits());
        }

        let mut processed = 0u8;
        let mut num_points = 0;
        for code in 0..8 {
            let start = Corner::new(code);
            if processed & start.mask() != 0 || !config.contains(start) {
                processed |= start.mask();
                continue;
            }

            // walk the connected component of inside corners reachable from
            // `start`, collecting every edge that exits to an outside corner
            stack.push(start);
            let mut component = start.mask();
            let mut point_code = EdgeMask::empty();
            while let Some(corner) = stack.pop() {
                let neighbors = [corner.flip_x(), corner.flip_y(), corner.flip_z()];
                for (axis, neighbor) in neighbors.into_iter().enumerate() {
                    if !config.contains(neighbor) {
                        point_code |= CORNER_EDGES[corner.code() as usize][axis];
                    } else if component & neighbor.mask() == 0 {
                        component |= neighbor.mask();
                        stack.push(neighbor);
                    }
                }
            }

            debug_assert_eq!(processed & component, 0);
            debug_assert!(!point_code.is_empty());
            processed |= component;
            table[cube][num_points] = point_code.bits();
            num_points += 1;
        }
    }

    table
}

/// Derive the manifold ambiguity table: for each cube configuration, the
/// direction of its single ambiguous face ([`FaceDir`] encoding), or
/// [`NO_AMBIGUOUS_FACE`] for the configurations that have none.
pub fn problematic_configs() -> [u8; 256] {
    info!("deriving manifold dual marching cubes table");

    let mut table = [NO_AMBIGUOUS_FACE; 256];

    // representatives of the two problematic classes, both with the
    // ambiguous face in +x direction: C16 (five inside corners) and C19 (six)
    let c16 = CubeConfig::new(0b1100_0111);
    let c19 = CubeConfig::new(0b1101_0111);
    explore_rotations(c16, &mut table);
    explore_rotations(c19, &mut table);

    table
}

/// Roll `config` four quarter turns around the axis of its ambiguous face,
/// recording each resulting configuration under that face direction.
fn register_rolls(
    rot: fn(CubeConfig) -> CubeConfig,
    mut config: CubeConfig,
    dir: FaceDir,
    table: &mut [u8; 256],
) {
    for _ in 0..4 {
        config = rot(config);
        table[config.bits() as usize] = dir.index();
    }
}

/// Bring the ambiguous face of `config` into all six axis directions and
/// enumerate the four roll rotations around each, covering every rotation
/// of the configuration's class.
fn explore_rotations(mut config: CubeConfig, table: &mut [u8; 256]) {
    // the seed's +x face must carry the diagonal ambiguity pattern:
    // of its corners {C1,C3,C5,C7}, exactly {C1,C7} or {C3,C5} are inside
    debug_assert!(matches!(
        config.bits() & 0b1010_1010,
        0b1000_0010 | 0b0010_1000
    ));

    let mut dir = FaceDir::PosX;
    register_rolls(CubeConfig::rot_x, config, dir, table);

    dir = dir.rot_z();
    config = config.rot_z();
    register_rolls(CubeConfig::rot_y, config, dir, table);

    dir = dir.rot_z();
    config = config.rot_z();
    register_rolls(CubeConfig::rot_x, config, dir, table);

    dir = dir.rot_z();
    config = config.rot_z();
    register_rolls(CubeConfig::rot_y, config, dir, table);

    dir = dir.rot_x();
    config = config.rot_x();
    register_rolls(CubeConfig::rot_z, config, dir, table);

    dir = dir.rot_x().rot_x();
    config = config.rot_x().rot_x();
    register_rolls(CubeConfig::rot_z, config, dir, table);
}

/// Write both tables as the Rust source compiled into the crate
/// (`src/tables.rs`).
pub fn write_tables_source<W: Write>(out: &mut W) -> io::Result<()> {
    let dual = dual_points_table();
    let problematic = problematic_configs();

    writeln!(
        out,
        "//! Compiled lookup tables for (manifold) dual marching cubes."
    )?;
    writeln!(out, "//!")?;
    writeln!(
        out,
        "//! Generated by the `gentables` binary from [`crate::gentables`];"
    )?;
    writeln!(out, "//! do not edit by hand.")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Sentinel in [`PROBLEMATIC_CONFIGS`] for configurations without an"
    )?;
    writeln!(out, "/// ambiguous face.")?;
    writeln!(out, "pub const NO_AMBIGUOUS_FACE: u8 = 255;")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Up to four dual points per cube configuration, each encoded as a"
    )?;
    writeln!(
        out,
        "/// 12-bit mask over the surface-crossing edges it owns. Unused entries"
    )?;
    writeln!(out, "/// are zero.")?;
    writeln!(out, "pub static DUAL_POINTS_LIST: [[u16; 4]; 256] = [")?;
    for (cube, row) in dual.iter().enumerate() {
        writeln!(
            out,
            "    [0x{:03x}, 0x{:03x}, 0x{:03x}, 0x{:03x}], // {}",
            row[0], row[1], row[2], row[3], cube
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Direction of the single ambiguous face for the rotations of the two"
    )?;
    writeln!(
        out,
        "/// problematic cube classes ({{-x,+x,-y,+y,-z,+z}} = 0..6), or"
    )?;
    writeln!(
        out,
        "/// [`NO_AMBIGUOUS_FACE`] everywhere else."
    )?;
    writeln!(out, "pub static PROBLEMATIC_CONFIGS: [u8; 256] = [")?;
    for base in (0..256).step_by(16) {
        let row: Vec<String> = (base..base + 16)
            .map(|i| format!("{:3}", problematic[i]))
            .collect();
        writeln!(out, "    {}, // {}..={}", row.join(", "), base, base + 15)?;
    }
    writeln!(out, "];")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    #[test]
    fn derived_tables_match_compiled_tables() {
        assert_eq!(dual_points_table(), tables::DUAL_POINTS_LIST);
        assert_eq!(problematic_configs(), tables::PROBLEMATIC_CONFIGS);
    }

    #[test]
    fn written_source_declares_both_tables() {
        let mut out = Vec::new();
        write_tables_source(&mut out).unwrap();
        let source = String::from_utf8(out).unwrap();
        assert!(source.contains("pub static DUAL_POINTS_LIST: [[u16; 4]; 256]"));
        assert!(source.contains("pub static PROBLEMATIC_CONFIGS: [u8; 256]"));
        // one row per configuration in each table
        assert_eq!(source.matches("0x").count(), 256 * 4);
    }
}
