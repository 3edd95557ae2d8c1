//! Contains the Dual Marching Cubes implementation, with
//! [`extract_surface`] and [`build`] as its entry points.
//!
//! # Explanation
//! Faces and vertices of the classic Marching Cubes algorithm correspond to
//! vertices and faces of the dual mesh. Each cube configuration owns up to
//! four dual points, one per marching cubes patch, placed at the average of
//! the surface intersections on the patch's edges. Every grid edge that
//! crosses the surface is shared by four cubes, and their dual points are
//! connected into one quad, so the result is made entirely from
//! quadrangles.
//!
//! Under rare configurations the plain dual mesh is non-manifold. The
//! optional manifold correction inverts a problematic cube when the cube
//! across its single ambiguous face is problematic too, which makes the
//! patches on the shared face agree at the cost of strict duality to
//! marching cubes.
//!
//! # References
//! Refer to the comments at the start of [`src/lib.rs`].

use std::collections::HashMap;

use ahash::RandomState;
use cgmath::point3;
use log::debug;
use rayon::prelude::*;

use crate::cube::EdgeMask;
use crate::mesh::{Quad, QuadMesh, Vertex};
use crate::tables::{DUAL_POINTS_LIST, NO_AMBIGUOUS_FACE, PROBLEMATIC_CONFIGS};
use crate::volume::{VolumeGrid, VolumeSample};

/// Options for a surface extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Apply the manifold correction. Guarantees that every mesh edge is
    /// shared by at most two quads, but breaks strict duality to classic
    /// marching cubes.
    pub manifold: bool,
    /// Emit four fresh vertices per quad instead of sharing dual points
    /// through a hash map.
    pub quad_soup: bool,
}

/// Extracts the iso surface of `volume` and returns a fresh mesh. A sample
/// is inside the surface iff it is `>= iso`.
pub fn extract_surface<S: VolumeSample>(
    volume: &VolumeGrid<'_, S>,
    iso: S,
    options: ExtractionOptions,
) -> QuadMesh {
    let mut mesh = QuadMesh::default();
    build(volume, iso, options, &mut mesh.vertices, &mut mesh.quads);
    mesh
}

/// Extracts the iso surface of `volume` into caller-owned containers,
/// clearing them first. A volume with any extent below 2 has no cells and
/// produces an empty mesh.
pub fn build<S: VolumeSample>(
    volume: &VolumeGrid<'_, S>,
    iso: S,
    options: ExtractionOptions,
    vertices: &mut Vec<Vertex>,
    quads: &mut Vec<Quad>,
) {
    vertices.clear();
    quads.clear();

    let cells = CellGrid {
        volume,
        iso,
        manifold: options.manifold,
    };
    if options.quad_soup {
        cells.build_quad_soup(vertices, quads);
    } else {
        cells.build_shared_vertices(vertices, quads);
    }

    debug!(
        "extracted {} vertices and {} quads (manifold: {}, soup: {})",
        vertices.len(),
        quads.len(),
        options.manifold,
        options.quad_soup
    );
}

/// Cube-local geometry of the twelve edges: the axis each runs along and
/// the cell-local coordinates of its low-index endpoint.
const EDGE_GEOMETRY: [(usize, [i32; 3]); 12] = [
    (0, [0, 0, 0]),
    (2, [1, 0, 0]),
    (0, [0, 0, 1]),
    (2, [0, 0, 0]),
    (0, [0, 1, 0]),
    (2, [1, 1, 0]),
    (0, [0, 1, 1]),
    (2, [0, 1, 0]),
    (1, [0, 0, 0]),
    (1, [1, 0, 0]),
    (1, [1, 0, 1]),
    (1, [0, 0, 1]),
];

/// Key that uniquely identifies a dual point: the linearized id of its
/// owning cell and its point code. Two cube edges of the same marching
/// cubes patch map to the same key and therefore to the same vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct DualPointKey {
    cell: i32,
    code: u16,
}

/// Per-cell primitives over one volume and iso value.
struct CellGrid<'a, S: VolumeSample> {
    volume: &'a VolumeGrid<'a, S>,
    iso: S,
    manifold: bool,
}

impl<S: VolumeSample> CellGrid<'_, S> {
    /// 8-bit in/out mask of the cell cube at (cx, cy, cz). Bit k is set iff
    /// the sample at the corner with Morton code k is inside.
    fn cell_code(&self, cx: i32, cy: i32, cz: i32) -> u8 {
        let mut code = 0u8;
        for corner in 0..8u8 {
            let x = cx + i32::from(corner & 1);
            let y = cy + i32::from((corner >> 1) & 1);
            let z = cz + i32::from((corner >> 2) & 1);
            if self.volume.sample(x, y, z) >= self.iso {
                code |= 1 << corner;
            }
        }
        code
    }

    /// 12-bit point code of the dual point at (cx, cy, cz) that owns
    /// `edge`, or 0 if the cube places no dual point on that edge. Applies
    /// the manifold correction when enabled.
    fn dual_point_code(&self, cx: i32, cy: i32, cz: i32, edge: EdgeMask) -> u16 {
        let mut code = self.cell_code(cx, cy, cz);

        if self.manifold {
            let dir = PROBLEMATIC_CONFIGS[code as usize];
            if dir != NO_AMBIGUOUS_FACE {
                // invert this cube only when the cube across the ambiguous
                // face is problematic too, so the patches on that face agree
                let axis = usize::from(dir >> 1);
                let mut neighbor = [cx, cy, cz];
                neighbor[axis] += if dir & 1 == 1 { 1 } else { -1 };
                if neighbor[axis] >= 0 && neighbor[axis] < self.volume.extent(axis) - 1 {
                    let neighbor_code = self.cell_code(neighbor[0], neighbor[1], neighbor[2]);
                    if PROBLEMATIC_CONFIGS[neighbor_code as usize] != NO_AMBIGUOUS_FACE {
                        code = !code;
                    }
                }
            }
        }

        DUAL_POINTS_LIST[code as usize]
            .into_iter()
            .find(|&entry| entry & edge.bits() != 0)
            .unwrap_or(0)
    }

    /// Position of the dual point with `code` in the cell at (cx, cy, cz):
    /// the average of the linearly interpolated surface intersections on
    /// the code's edges, in voxel units.
    fn dual_point(&self, cx: i32, cy: i32, cz: i32, code: u16) -> Vertex {
        debug_assert_ne!(code, 0);
        let iso = self.iso.as_f64();
        let mut p = [0.0f64; 3];
        let mut points = 0u32;

        for (edge, &(axis, low)) in EDGE_GEOMETRY.iter().enumerate() {
            if code & (1 << edge) == 0 {
                continue;
            }
            let mut high = low;
            high[axis] += 1;
            let a = self
                .volume
                .sample(cx + low[0], cy + low[1], cz + low[2])
                .as_f64();
            let b = self
                .volume
                .sample(cx + high[0], cy + high[1], cz + high[2])
                .as_f64();
            // the edge crosses the surface, so a != b
            let t = (iso - a) / (b - a);
            for (sum, &offset) in p.iter_mut().zip(low.iter()) {
                *sum += f64::from(offset);
            }
            p[axis] += t;
            points += 1;
        }

        let scale = 1.0 / f64::from(points);
        point3(
            (f64::from(cx) + p[0] * scale) as f32,
            (f64::from(cy) + p[1] * scale) as f32,
            (f64::from(cz) + p[2] * scale) as f32,
        )
    }

    /// Dual point of the cell at (cx, cy, cz) on a crossed `edge`.
    fn edge_dual_point(&self, cx: i32, cy: i32, cz: i32, edge: EdgeMask) -> Vertex {
        let code = self.dual_point_code(cx, cy, cz, edge);
        self.dual_point(cx, cy, cz, code)
    }

    /// Visits every surface-crossing grid edge rooted in row `z` and passes
    /// the four (cell, incident edge) pairs around it, already in winding
    /// order: the counter-clockwise normal of the emitted quad points out
    /// of the solid region.
    fn visit_row_quads<F>(&self, z: i32, mut emit: F)
    where
        F: FnMut([(i32, i32, i32, EdgeMask); 4]),
    {
        let reversed = |q: [(i32, i32, i32, EdgeMask); 4]| [q[0], q[3], q[2], q[1]];

        for y in 0..self.volume.dim_y() - 1 {
            for x in 0..self.volume.dim_x() - 1 {
                let s0 = self.volume.sample(x, y, z);

                // quad across the x edge leaving (x, y, z)
                if y > 0 && z > 0 {
                    let s1 = self.volume.sample(x + 1, y, z);
                    let entering = s0 < self.iso && s1 >= self.iso;
                    let exiting = s0 >= self.iso && s1 < self.iso;
                    if entering || exiting {
                        let quad = [
                            (x, y, z, EdgeMask::EDGE0),
                            (x, y, z - 1, EdgeMask::EDGE2),
                            (x, y - 1, z - 1, EdgeMask::EDGE6),
                            (x, y - 1, z, EdgeMask::EDGE4),
                        ];
                        emit(if entering { quad } else { reversed(quad) });
                    }
                }

                // quad across the y edge
                if x > 0 && z > 0 {
                    let s1 = self.volume.sample(x, y + 1, z);
                    let entering = s0 < self.iso && s1 >= self.iso;
                    let exiting = s0 >= self.iso && s1 < self.iso;
                    if entering || exiting {
                        let quad = [
                            (x, y, z, EdgeMask::EDGE8),
                            (x, y, z - 1, EdgeMask::EDGE11),
                            (x - 1, y, z - 1, EdgeMask::EDGE10),
                            (x - 1, y, z, EdgeMask::EDGE9),
                        ];
                        emit(if exiting { quad } else { reversed(quad) });
                    }
                }

                // quad across the z edge
                if x > 0 && y > 0 {
                    let s1 = self.volume.sample(x, y, z + 1);
                    let entering = s0 < self.iso && s1 >= self.iso;
                    let exiting = s0 >= self.iso && s1 < self.iso;
                    if entering || exiting {
                        let quad = [
                            (x, y, z, EdgeMask::EDGE3),
                            (x - 1, y, z, EdgeMask::EDGE1),
                            (x - 1, y - 1, z, EdgeMask::EDGE5),
                            (x, y - 1, z, EdgeMask::EDGE7),
                        ];
                        emit(if exiting { quad } else { reversed(quad) });
                    }
                }
            }
        }
    }

    /// Shared-vertex extraction: dual points are deduplicated through a
    /// hash map keyed on (cell id, point code).
    fn build_shared_vertices(&self, vertices: &mut Vec<Vertex>, quads: &mut Vec<Quad>) {
        let mut point_to_index: HashMap<DualPointKey, u32, RandomState> =
            HashMap::with_capacity_and_hasher(1 << 12, RandomState::new());

        for z in 0..self.volume.dim_z() - 1 {
            self.visit_row_quads(z, |quad| {
                let [i0, i1, i2, i3] = quad.map(|(cx, cy, cz, edge)| {
                    self.shared_dual_point_index(cx, cy, cz, edge, &mut point_to_index, vertices)
                });
                quads.push(Quad::new(i0, i1, i2, i3));
            });
        }
    }

    /// Index of the dual point identified by a cell and one of its crossed
    /// edges, computing and appending the vertex on first use.
    fn shared_dual_point_index(
        &self,
        cx: i32,
        cy: i32,
        cz: i32,
        edge: EdgeMask,
        point_to_index: &mut HashMap<DualPointKey, u32, RandomState>,
        vertices: &mut Vec<Vertex>,
    ) -> u32 {
        let code = self.dual_point_code(cx, cy, cz, edge);
        let key = DualPointKey {
            cell: self.volume.linear_index(cx, cy, cz),
            code,
        };
        *point_to_index.entry(key).or_insert_with(|| {
            let index = vertices.len() as u32;
            vertices.push(self.dual_point(cx, cy, cz, code));
            index
        })
    }

    /// Quad-soup extraction: four fresh vertices per quad, no sharing. The
    /// outer z loop runs in parallel; per-row results are spliced back in z
    /// order, so the output is identical to a sequential pass.
    fn build_quad_soup(&self, vertices: &mut Vec<Vertex>, quads: &mut Vec<Quad>) {
        let rows: Vec<Vec<[Vertex; 4]>> = (0..self.volume.dim_z() - 1)
            .into_par_iter()
            .map(|z| {
                let mut row = Vec::new();
                self.visit_row_quads(z, |quad| {
                    row.push(quad.map(|(cx, cy, cz, edge)| self.edge_dual_point(cx, cy, cz, edge)));
                });
                row
            })
            .collect();

        for corners in rows.into_iter().flatten() {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&corners);
            quads.push(Quad::new(base, base + 1, base + 2, base + 3));
        }
    }
}
