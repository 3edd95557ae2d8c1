//! Cube-local geometry shared by the table generator and the extraction
//! engine: Morton corner codes, the 12-bit edge mask, the corner/edge
//! incidence table and the quarter-turn rotation group.
//!
//! Corners are numbered by the Morton code of their local coordinates
//! (bit 0 = x, bit 1 = y, bit 2 = z). Edges follow the classic marching
//! cubes numbering; see [`CORNER_EDGES`] for how the two relate.

use bitflags::bitflags;

bitflags! {
    /// Mask over the twelve edges of a cube. A dual-point code is such a
    /// mask: the set of surface-crossing edges owned by one dual point.
    pub struct EdgeMask : u16 {
        const EDGE0 = 1;
        const EDGE1 = 1 << 1;
        const EDGE2 = 1 << 2;
        const EDGE3 = 1 << 3;
        const EDGE4 = 1 << 4;
        const EDGE5 = 1 << 5;
        const EDGE6 = 1 << 6;
        const EDGE7 = 1 << 7;
        const EDGE8 = 1 << 8;
        const EDGE9 = 1 << 9;
        const EDGE10 = 1 << 10;
        const EDGE11 = 1 << 11;
    }
}

/// A cube corner addressed by its 3-bit Morton code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Corner(u8);

impl Corner {
    /// # Panics
    /// Panics if `code` is not a valid corner code (0..8).
    pub fn new(code: u8) -> Self {
        assert!(code < 8);
        Self(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// Bit of this corner within an 8-bit cube configuration.
    pub const fn mask(self) -> u8 {
        1 << self.0
    }

    /// Corner on the other end of the incident x-aligned edge.
    pub const fn flip_x(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Corner on the other end of the incident y-aligned edge.
    pub const fn flip_y(self) -> Self {
        Self(self.0 ^ 2)
    }

    /// Corner on the other end of the incident z-aligned edge.
    pub const fn flip_z(self) -> Self {
        Self(self.0 ^ 4)
    }
}

/// For each corner, its three incident edges in axis order (x, y, z).
pub const CORNER_EDGES: [[EdgeMask; 3]; 8] = [
    [EdgeMask::EDGE0, EdgeMask::EDGE8, EdgeMask::EDGE3],
    [EdgeMask::EDGE0, EdgeMask::EDGE9, EdgeMask::EDGE1],
    [EdgeMask::EDGE4, EdgeMask::EDGE8, EdgeMask::EDGE7],
    [EdgeMask::EDGE4, EdgeMask::EDGE9, EdgeMask::EDGE5],
    [EdgeMask::EDGE2, EdgeMask::EDGE11, EdgeMask::EDGE3],
    [EdgeMask::EDGE2, EdgeMask::EDGE10, EdgeMask::EDGE1],
    [EdgeMask::EDGE6, EdgeMask::EDGE11, EdgeMask::EDGE7],
    [EdgeMask::EDGE6, EdgeMask::EDGE10, EdgeMask::EDGE5],
];

/// An 8-bit in/out classification of the eight cube corners. Bit k is set
/// iff corner k is inside the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeConfig(u8);

impl CubeConfig {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, corner: Corner) -> bool {
        self.0 & corner.mask() != 0
    }

    /// Quarter turn around the x axis. Corner pairs move in cycles
    /// (0,1) -> (4,5) -> (6,7) -> (2,3) -> (0,1).
    pub const fn rot_x(self) -> Self {
        let c = self.0;
        Self(((c & 0x03) << 2) | ((c & 0x0c) << 4) | ((c & 0x30) >> 4) | ((c & 0xc0) >> 2))
    }

    /// Quarter turn around the y axis. Corner pairs move in cycles
    /// (0,2) -> (4,6) -> (5,7) -> (1,3) -> (0,2).
    pub const fn rot_y(self) -> Self {
        let c = self.0;
        Self(((c & 0x05) << 4) | ((c & 0x0a) >> 1) | ((c & 0x50) << 1) | ((c & 0xa0) >> 4))
    }

    /// Quarter turn around the z axis. Corner pairs move in cycles
    /// (0,4) -> (1,5) -> (3,7) -> (2,6) -> (0,4).
    pub const fn rot_z(self) -> Self {
        let c = self.0;
        Self(((c & 0x11) << 1) | ((c & 0x22) << 2) | ((c & 0x44) >> 2) | ((c & 0x88) >> 1))
    }
}

/// Direction of a cube face. The discriminants match the manifold table
/// encoding: axis index is `dir as u8 >> 1`, positive orientation is the
/// low bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceDir {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl FaceDir {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn rot_x(self) -> Self {
        use FaceDir::*;
        [NegX, PosX, NegZ, PosZ, PosY, NegY][self as usize]
    }

    pub fn rot_y(self) -> Self {
        use FaceDir::*;
        [PosZ, NegZ, NegY, PosY, NegX, PosX][self as usize]
    }

    pub fn rot_z(self) -> Self {
        use FaceDir::*;
        [NegY, PosY, PosX, NegX, NegZ, PosZ][self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_have_order_four() {
        for bits in 0..=255u8 {
            let c = CubeConfig::new(bits);
            assert_eq!(c.rot_x().rot_x().rot_x().rot_x(), c);
            assert_eq!(c.rot_y().rot_y().rot_y().rot_y(), c);
            assert_eq!(c.rot_z().rot_z().rot_z().rot_z(), c);
        }
    }

    #[test]
    fn axis_rotations_have_order_four() {
        use FaceDir::*;
        for dir in [NegX, PosX, NegY, PosY, NegZ, PosZ] {
            assert_eq!(dir.rot_x().rot_x().rot_x().rot_x(), dir);
            assert_eq!(dir.rot_y().rot_y().rot_y().rot_y(), dir);
            assert_eq!(dir.rot_z().rot_z().rot_z().rot_z(), dir);
        }
    }

    #[test]
    fn rotations_fix_their_own_axis() {
        use FaceDir::*;
        assert_eq!(PosX.rot_x(), PosX);
        assert_eq!(NegX.rot_x(), NegX);
        assert_eq!(PosY.rot_y(), PosY);
        assert_eq!(PosZ.rot_z(), PosZ);
        // and a quarter turn around z carries +x onto +y
        assert_eq!(PosX.rot_z(), PosY);
    }

    #[test]
    fn corner_edge_incidence() {
        // every edge is incident to exactly two corners
        for edge in 0..12 {
            let mask = EdgeMask::from_bits(1 << edge).unwrap();
            let incident = CORNER_EDGES
                .iter()
                .flatten()
                .filter(|&&e| e == mask)
                .count();
            assert_eq!(incident, 2, "edge {}", edge);
        }
        // edges listed for a corner connect it to its three axis neighbors
        for code in 0..8u8 {
            let corner = Corner::new(code);
            for (axis, neighbor) in [corner.flip_x(), corner.flip_y(), corner.flip_z()]
                .into_iter()
                .enumerate()
            {
                assert_eq!(
                    CORNER_EDGES[corner.code() as usize][axis],
                    CORNER_EDGES[neighbor.code() as usize][axis],
                    "corner {} axis {}",
                    code,
                    axis
                );
            }
        }
    }
}
