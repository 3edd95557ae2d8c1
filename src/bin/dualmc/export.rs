//! Mesh writers for the front end: Wavefront OBJ quads and ASCII STL
//! triangle pairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cgmath::Vector3;
use log::{info, warn};

use dualmc::QuadMesh;

/// Writes the mesh as a Wavefront OBJ file with quad faces.
pub fn write_obj(path: &Path, mesh: &QuadMesh) -> Result<()> {
    if mesh.is_empty() {
        warn!("no iso surface generated, skipping OBJ output");
        return Ok(());
    }
    info!(
        "writing OBJ mesh with {} vertices and {} quads to {:?}",
        mesh.vertices.len(),
        mesh.quads.len(),
        path
    );

    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let mut out = BufWriter::new(file);

    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    // OBJ indices are 1-based
    for q in &mesh.quads {
        writeln!(out, "f {} {} {} {}", q.i0 + 1, q.i1 + 1, q.i2 + 1, q.i3 + 1)?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the mesh as an ASCII STL file, splitting every quad into two
/// triangles along its (i0, i2) diagonal.
pub fn write_stl(path: &Path, mesh: &QuadMesh) -> Result<()> {
    if mesh.is_empty() {
        warn!("no iso surface generated, skipping STL output");
        return Ok(());
    }
    info!(
        "writing STL mesh with {} triangles to {:?}",
        2 * mesh.quads.len(),
        path
    );

    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "solid surface")?;
    for quad in &mesh.quads {
        for [a, b, c] in quad.triangles() {
            let v0 = mesh.vertices[a as usize];
            let v1 = mesh.vertices[b as usize];
            let v2 = mesh.vertices[c as usize];
            let normal: Vector3<f32> = (v1 - v0).cross(v2 - v0);
            writeln!(out, "facet normal {} {} {}", normal.x, normal.y, normal.z)?;
            writeln!(out, " outer loop")?;
            for v in [v0, v1, v2] {
                writeln!(out, "  vertex {} {} {}", v.x, v.y, v.z)?;
            }
            writeln!(out, " endloop")?;
            writeln!(out, "endfacet")?;
        }
    }
    writeln!(out, "endsolid surface")?;

    out.flush()?;
    Ok(())
}
