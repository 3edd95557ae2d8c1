//! Dual Marching Cubes iso-surface extraction for dense scalar volumes.
//!
//! Given a volume of samples on a regular grid and an iso value, the
//! extraction produces a pure quadrilateral mesh, either with shared
//! vertices or as a per-quad soup. The optional manifold correction
//! guarantees that every mesh edge is shared by at most two quads.
//!
//! Both lookup tables the engine runs on are derived from first principles
//! in [`gentables`]; the `gentables` binary regenerates their compiled form
//! in [`tables`].
//!
//! # References
//! * Gregory M. Nielson, *Dual Marching Cubes* (IEEE Visualization 2004).
//! * Rephael Wenger, *Isosurfaces: Geometry, Topology, and Algorithms*,
//!   chapter 3.3.5, for the manifold correction.

pub mod cube;
pub mod dmc;
pub mod gentables;
pub mod mesh;
pub mod tables;
pub mod volume;

pub use crate::dmc::*;
pub use crate::mesh::{Quad, QuadMesh, Vertex};
pub use crate::volume::{VolumeGrid, VolumeSample};
