use std::collections::HashSet;

use dualmc::cube::{CubeConfig, CORNER_EDGES};
use dualmc::tables::{DUAL_POINTS_LIST, NO_AMBIGUOUS_FACE, PROBLEMATIC_CONFIGS};

/// Mask of all edges whose two endpoint corners differ in membership.
fn straddling_edges(config: u8) -> u16 {
    let mut edges = 0u16;
    for corner in 0..8u8 {
        for (axis, edge) in CORNER_EDGES[corner as usize].iter().enumerate() {
            let neighbor = corner ^ (1 << axis);
            if (config >> corner) & 1 != (config >> neighbor) & 1 {
                edges |= edge.bits();
            }
        }
    }
    edges
}

#[test]
fn dual_points_partition_the_straddling_edges() {
    for config in 0..=255u8 {
        let mut union = 0u16;
        for entry in DUAL_POINTS_LIST[config as usize] {
            assert_eq!(union & entry, 0, "config {} has overlapping entries", config);
            union |= entry;
        }
        assert_eq!(union, straddling_edges(config), "config {}", config);
    }
}

#[test]
fn dual_point_counts_stay_in_range() {
    for config in 0..=255usize {
        let points = DUAL_POINTS_LIST[config]
            .iter()
            .filter(|&&entry| entry != 0)
            .count();
        if config == 0 || config == 255 {
            assert_eq!(points, 0);
        } else {
            assert!((1..=4).contains(&points), "config {}", config);
        }
    }
}

/// All configurations reachable from `seed` through quarter turns.
fn rotation_orbit(seed: u8) -> HashSet<u8> {
    let mut orbit = HashSet::from([seed]);
    let mut stack = vec![seed];
    while let Some(bits) = stack.pop() {
        let config = CubeConfig::new(bits);
        for rotated in [config.rot_x(), config.rot_y(), config.rot_z()] {
            if orbit.insert(rotated.bits()) {
                stack.push(rotated.bits());
            }
        }
    }
    orbit
}

/// Corner mask of the face in direction `dir` and the masks of its two
/// diagonal corner pairs.
fn face_diagonals(dir: u8) -> (u8, [u8; 2]) {
    match dir {
        0 => (0b0101_0101, [0b0100_0001, 0b0001_0100]),
        1 => (0b1010_1010, [0b1000_0010, 0b0010_1000]),
        2 => (0b0011_0011, [0b0010_0001, 0b0001_0010]),
        3 => (0b1100_1100, [0b1000_0100, 0b0100_1000]),
        4 => (0b0000_1111, [0b0000_1001, 0b0000_0110]),
        5 => (0b1111_0000, [0b1001_0000, 0b0110_0000]),
        _ => panic!("invalid face direction {}", dir),
    }
}

/// Does the face in direction `dir` carry the ambiguity pattern: exactly
/// one of its diagonal corner pairs inside?
fn face_is_ambiguous(config: u8, dir: u8) -> bool {
    let (face, diagonals) = face_diagonals(dir);
    diagonals.contains(&(config & face))
}

#[test]
fn problematic_configs_are_the_rotations_of_c16_and_c19() {
    // the two representatives, ambiguous face in +x direction
    let mut expected = rotation_orbit(0b1100_0111);
    expected.extend(rotation_orbit(0b1101_0111));

    let actual: HashSet<u8> = (0..=255u8)
        .filter(|&c| PROBLEMATIC_CONFIGS[c as usize] != NO_AMBIGUOUS_FACE)
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn recorded_direction_is_the_unique_ambiguous_face() {
    for config in 0..=255u8 {
        let dir = PROBLEMATIC_CONFIGS[config as usize];
        if dir == NO_AMBIGUOUS_FACE {
            continue;
        }
        assert!(dir < 6, "config {}", config);
        assert!(face_is_ambiguous(config, dir), "config {}", config);
        let ambiguous = (0..6).filter(|&d| face_is_ambiguous(config, d)).count();
        assert_eq!(ambiguous, 1, "config {}", config);
    }
}
