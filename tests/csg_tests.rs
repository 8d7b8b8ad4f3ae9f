mod support;

use mesh_boolean::{
    BooleanOp, Mesh, Triangle,
    boolean::{self, boolean_triangles},
    traits::{CSGOps, TriangleSource},
};

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::support::{approx_eq, bounding_box, sorted};

fn unit_cube() -> Mesh {
    Mesh::cube(1.0)
}

/// A unit cube overlapping `unit_cube` by half its width along X: spans x ∈ [0, 1].
fn shifted_cube() -> Mesh {
    Mesh::cube(1.0).translate(0.5, 0.0, 0.0)
}

fn assert_bounds(triangles: &[Triangle], expected: [f64; 6]) {
    let bb = bounding_box(triangles);
    for (actual, want) in bb.iter().zip(expected) {
        assert!(
            approx_eq(*actual, want as _, 1e-9),
            "bounding box {bb:?} differs from {expected:?}"
        );
    }
}

#[test]
fn union() {
    support::init_tracing();

    let result = unit_cube().union(&shifted_cube());

    // the hidden faces at the overlap are dropped
    assert!(result.face_count() < 24);
    assert_eq!(result.face_count(), 20);
    assert_bounds(&result.triangles(), [-0.5, -0.5, -0.5, 1.0, 0.5, 0.5]);
}

#[test]
fn union_is_symmetric() {
    let ab = unit_cube().union(&shifted_cube());
    let ba = shifted_cube().union(&unit_cube());

    assert_eq!(ab.face_count(), ba.face_count());
    assert_eq!(bounding_box(&ab.triangles()), bounding_box(&ba.triangles()));
}

#[test]
fn union_never_adds_triangles() {
    let a = unit_cube();
    for offset in [0.0, 0.25, 0.5, 0.75, 1.0, 3.0] {
        for b in [
            Mesh::cube(1.0).translate(offset, 0.0, 0.0),
            Mesh::cube(1.0).translate(0.0, offset, 0.0),
            Mesh::cube(0.5).translate(offset, offset, 0.0),
        ] {
            let result = a.union(&b);
            assert!(result.face_count() <= a.face_count() + b.face_count());
        }
    }
}

#[test]
fn intersection() {
    let result = unit_cube().intersection(&shifted_cube());

    assert!(!result.is_empty());
    assert_eq!(result.face_count(), 4);
    assert_bounds(&result.triangles(), [0.0, -0.5, -0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn intersection_keeps_outward_winding() {
    let result = unit_cube().intersection(&shifted_cube());
    let center = Point3::new(0.25, 0.0, 0.0);

    for tri in result.triangles() {
        let outward = tri.centroid() - center;
        assert!(tri.plane().normal().dot(&outward) > 0.0, "{tri:?} faces inward");
    }
}

#[test]
fn difference() {
    let result = unit_cube().difference(&shifted_cube());

    assert!(!result.is_empty());
    assert_eq!(result.face_count(), 12);
    // nothing is left of A where B was, nor of B outside A
    let bb = bounding_box(&result.triangles());
    assert!(bb[3] <= 0.5 + 1e-9, "result reaches x = {}", bb[3]);
    assert_bounds(&result.triangles(), [-0.5, -0.5, -0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn difference_reverses_the_cut_faces() {
    let triangles = unit_cube().difference(&shifted_cube()).triangles();

    // A's ten survivors come first; the last two are B's -x side at x = 0
    assert_eq!(triangles.len(), 12);
    for tri in &triangles[10..] {
        assert!(tri.vertices.iter().all(|p| p.x == 0.0));
        assert_relative_eq!(tri.plane().normal(), Vector3::x(), epsilon = 1e-9);
    }
}

#[test]
fn disjoint_inputs() {
    let a = unit_cube();
    let b = Mesh::cube(1.0).translate(5.0, 0.0, 0.0);

    let union = a.union(&b);
    assert_eq!(union.face_count(), a.face_count() + b.face_count());
    assert!(union.face_count() >= a.face_count().max(b.face_count()));

    assert!(a.intersection(&b).is_empty());
    assert_eq!(a.intersection(&b).face_count(), 0);

    let difference = a.difference(&b);
    assert_eq!(sorted(&difference.triangles()), sorted(&a.triangles()));
}

#[test]
fn disjoint_mixed_solids() {
    let cube = unit_cube();
    let tetrahedron = Mesh::tetrahedron(0.5).translate(4.0, 0.0, 0.0);

    assert_eq!(cube.union(&tetrahedron).face_count(), 16);
    assert_eq!(sorted(&cube.difference(&tetrahedron).triangles()), sorted(&cube.triangles()));
    assert!(cube.intersection(&tetrahedron).is_empty());
}

#[test]
fn contained_solid() {
    let outer = unit_cube();
    let inner = Mesh::cube(0.5);

    // union: the inner cube disappears
    let union = outer.union(&inner);
    assert_eq!(sorted(&union.triangles()), sorted(&outer.triangles()));

    // intersection: only the inner cube is left, wound as it was
    let intersection = outer.intersection(&inner);
    assert_eq!(sorted(&intersection.triangles()), sorted(&inner.triangles()));

    // difference: the outer shell plus the inner cube turned inside out
    let difference = outer.difference(&inner);
    assert_eq!(difference.face_count(), 24);
    let inverted = inner.inverse();
    assert_eq!(
        sorted(&difference.triangles()[12..]),
        sorted(&inverted.triangles())
    );
}

#[test]
fn overlap_along_y() {
    let a = unit_cube();
    let b = Mesh::cube(1.0).translate(0.0, 0.5, 0.0);

    let union = a.union(&b);
    assert_eq!(union.face_count(), 20);
    assert_bounds(&union.triangles(), [-0.5, -0.5, -0.5, 0.5, 1.0, 0.5]);

    let intersection = a.intersection(&b);
    assert_bounds(&intersection.triangles(), [-0.5, 0.0, -0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn result_is_an_unwelded_soup() {
    let result = unit_cube().union(&shifted_cube());

    assert_eq!(result.vertex_count(), 3 * result.face_count());
    assert_eq!(result.normals.len(), result.vertex_count());
    for (face, indices) in result.indices.iter().enumerate() {
        let base = 3 * face as u32;
        assert_eq!(*indices, [base, base + 1, base + 2]);
    }
}

#[test]
fn free_functions_match_trait_methods() {
    let (a, b) = (unit_cube(), shifted_cube());

    assert_eq!(boolean::union(&a, &b).triangles(), a.union(&b).triangles());
    assert_eq!(
        boolean::difference(&a, &b).triangles(),
        a.difference(&b).triangles()
    );
    assert_eq!(
        boolean::intersection(&a, &b).triangles(),
        a.intersection(&b).triangles()
    );
}

#[test]
fn triangle_soups_are_sources() {
    let a = unit_cube().triangles();
    let b = shifted_cube().triangles();

    for op in BooleanOp::ALL {
        let from_soup = boolean::boolean(op, a.as_slice(), b.as_slice());
        assert_eq!(from_soup.triangles(), boolean_triangles(op, &a, &b));
    }
}
