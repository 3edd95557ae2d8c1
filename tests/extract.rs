use std::collections::{HashMap, HashSet};

use cgmath::{point3, EuclideanSpace, InnerSpace, Point3, Vector3};
use dualmc::{extract_surface, ExtractionOptions, Quad, QuadMesh};

use fixtures::{ball, TestVolume};

const ISO: u8 = 127;

fn shared(volume: &TestVolume, manifold: bool) -> QuadMesh {
    extract_surface(
        &volume.grid(),
        ISO,
        ExtractionOptions {
            manifold,
            quad_soup: false,
        },
    )
}

fn soup(volume: &TestVolume, manifold: bool) -> QuadMesh {
    extract_surface(
        &volume.grid(),
        ISO,
        ExtractionOptions {
            manifold,
            quad_soup: true,
        },
    )
}

/// Counter-clockwise normal of the quad's first triangle (quads are
/// planar or near-planar in these fixtures).
fn quad_normal(mesh: &QuadMesh, quad: Quad) -> Vector3<f32> {
    let [i0, i1, i2, _] = quad.indices();
    let v0 = mesh.vertices[i0 as usize];
    let v1 = mesh.vertices[i1 as usize];
    let v2 = mesh.vertices[i2 as usize];
    (v1 - v0).cross(v2 - v0)
}

fn quad_centroid(mesh: &QuadMesh, quad: Quad) -> Point3<f32> {
    let mut sum = Vector3::new(0.0, 0.0, 0.0);
    for i in quad.indices() {
        sum += mesh.vertices[i as usize].to_vec();
    }
    Point3::from_vec(sum / 4.0)
}

/// Highest number of quads sharing one undirected mesh edge.
fn max_edge_use(mesh: &QuadMesh) -> usize {
    let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
    for quad in &mesh.quads {
        let idx = quad.indices();
        for k in 0..4 {
            let (a, b) = (idx[k], idx[(k + 1) % 4]);
            *uses.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    uses.into_values().max().unwrap_or(0)
}

/// The unordered set of triangles of a mesh, with coincident vertices
/// merged by exact coordinate equality.
fn triangle_set(mesh: &QuadMesh) -> HashSet<[[u32; 3]; 3]> {
    let key = |v: Point3<f32>| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()];
    let mut triangles = HashSet::new();
    for quad in &mesh.quads {
        for tri in quad.triangles() {
            triangles.insert(tri.map(|i| key(mesh.vertices[i as usize])));
        }
    }
    triangles
}

#[test]
fn empty_field_produces_no_mesh() {
    let volume = TestVolume::filled([4, 4, 4], 0);
    let mesh = extract_surface(&volume.grid(), 1, ExtractionOptions::default());
    assert!(mesh.vertices.is_empty());
    assert!(mesh.quads.is_empty());
}

#[test]
fn full_field_produces_no_mesh() {
    let volume = TestVolume::filled([4, 4, 4], 255);
    let mesh = extract_surface(&volume.grid(), 1, ExtractionOptions::default());
    assert!(mesh.vertices.is_empty());
    assert!(mesh.quads.is_empty());
}

#[test]
fn single_interior_voxel_yields_a_closed_cube() {
    let mut volume = TestVolume::filled([4, 4, 4], 0);
    volume.set(2, 2, 2, 255);

    let mesh = shared(&volume, false);
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.quads.len(), 6);

    // the shell hugs the voxel: every vertex stays inside the cells
    // around sample (2, 2, 2)
    for v in &mesh.vertices {
        for component in [v.x, v.y, v.z] {
            assert!(component > 1.0 && component < 3.0, "vertex {:?}", v);
        }
    }

    // closed surface: each shell edge is shared by exactly two quads
    assert_eq!(max_edge_use(&mesh), 2);

    // quads face away from the enclosed voxel
    for &quad in &mesh.quads {
        let outward = quad_centroid(&mesh, quad) - point3(2.0, 2.0, 2.0);
        assert!(quad_normal(&mesh, quad).dot(outward) > 0.0);
    }
}

#[test]
fn flat_slab_boundary_is_a_single_quad_layer() {
    // solid upper half of a 9-cubed volume
    let mut volume = TestVolume::filled([9, 9, 9], 0);
    for z in 4..9 {
        for y in 0..9 {
            for x in 0..9 {
                volume.set(x, y, z, 255);
            }
        }
    }

    let mesh = shared(&volume, false);
    assert_eq!(mesh.vertices.len(), 64);
    assert_eq!(mesh.quads.len(), 49);

    // one flat layer at the interpolated crossing below z = 4
    let expected_z = 3.0 + f32::from(ISO) / 255.0;
    for v in &mesh.vertices {
        assert!((v.z - expected_z).abs() < 1e-5, "vertex {:?}", v);
    }

    // all quads are coplanar and face the empty region below the slab
    for &quad in &mesh.quads {
        let normal = quad_normal(&mesh, quad);
        assert!(normal.x.abs() < 1e-6 && normal.y.abs() < 1e-6);
        assert!(normal.z < 0.0);
    }
}

#[test]
fn no_quad_references_a_vertex_twice() {
    let volume = ball(8, 2.6);
    for mesh in [shared(&volume, false), shared(&volume, true)] {
        assert!(!mesh.quads.is_empty());
        for quad in &mesh.quads {
            let idx = quad.indices();
            for a in 0..4 {
                for b in a + 1..4 {
                    assert_ne!(idx[a], idx[b], "degenerate quad {:?}", idx);
                }
            }
        }
    }
}

#[test]
fn vertices_stay_inside_the_volume() {
    let volume = ball(8, 2.6);
    let mesh = shared(&volume, false);
    for v in &mesh.vertices {
        for component in [v.x, v.y, v.z] {
            assert!((0.0..=7.0).contains(&component), "vertex {:?}", v);
        }
    }
}

/// Two problematic cubes sharing their ambiguous face: without the
/// correction the dual mesh pinches at that face and an edge is used by
/// four quads; the correction restores a manifold surface.
#[test]
fn manifold_correction_removes_pinched_edges() {
    let mut volume = TestVolume::filled([4, 4, 4], 0);
    let inside = [
        (1, 1, 1),
        (3, 1, 1),
        (1, 2, 1),
        (2, 2, 1),
        (3, 2, 1),
        (1, 1, 2),
        (2, 1, 2),
        (3, 1, 2),
    ];
    for (x, y, z) in inside {
        volume.set(x, y, z, 255);
    }

    let plain = shared(&volume, false);
    assert!(!plain.quads.is_empty());
    assert!(max_edge_use(&plain) > 2, "expected a non-manifold edge");

    let corrected = shared(&volume, true);
    assert!(!corrected.quads.is_empty());
    assert!(max_edge_use(&corrected) <= 2);
}

#[test]
fn quad_soup_references_vertices_sequentially() {
    let volume = ball(8, 2.6);
    let mesh = soup(&volume, false);
    assert!(!mesh.quads.is_empty());
    assert_eq!(mesh.vertices.len(), 4 * mesh.quads.len());
    for (k, quad) in mesh.quads.iter().enumerate() {
        let base = 4 * k as u32;
        assert_eq!(quad.indices(), [base, base + 1, base + 2, base + 3]);
    }
}

#[test]
fn soup_and_shared_describe_the_same_triangles() {
    let volume = ball(9, 3.2);
    for manifold in [false, true] {
        let a = triangle_set(&shared(&volume, manifold));
        let b = triangle_set(&soup(&volume, manifold));
        assert_eq!(a, b, "manifold: {}", manifold);
    }
}

#[test]
fn extraction_is_deterministic() {
    let volume = ball(9, 3.2);
    assert_eq!(shared(&volume, true), shared(&volume, true));
    assert_eq!(soup(&volume, true), soup(&volume, true));
}
