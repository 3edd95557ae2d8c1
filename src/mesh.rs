//! Output mesh types: shared-vertex or quad-soup quadrilateral meshes.

use cgmath::Point3;

/// A dual point of the extracted surface, in voxel units. Each vertex lies
/// inside the unit cell that owns it.
pub type Vertex = Point3<f32>;

/// Four vertex indices in winding order. The counter-clockwise triangle
/// normal points out of the solid region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    pub i0: u32,
    pub i1: u32,
    pub i2: u32,
    pub i3: u32,
}

impl Quad {
    pub const fn new(i0: u32, i1: u32, i2: u32, i3: u32) -> Self {
        Self { i0, i1, i2, i3 }
    }

    pub const fn indices(self) -> [u32; 4] {
        [self.i0, self.i1, self.i2, self.i3]
    }

    /// Split along the (i0, i2) diagonal into two triangles.
    pub const fn triangles(self) -> [[u32; 3]; 2] {
        [[self.i0, self.i1, self.i2], [self.i0, self.i2, self.i3]]
    }
}

/// A quad mesh produced by an extraction. In quad-soup mode vertices are
/// not shared and quad k references vertices 4k..4k+4.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadMesh {
    pub vertices: Vec<Vertex>,
    pub quads: Vec<Quad>,
}

impl QuadMesh {
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}
