//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use mesh_boolean::{Triangle, float_types::Real};
use nalgebra::Point3;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of triangles.
pub fn bounding_box(triangles: &[Triangle]) -> [Real; 6] {
    let mut min = [Real::MAX; 3];
    let mut max = [Real::MIN; 3];

    for p in triangles.iter().flat_map(|t| t.vertices.iter()) {
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }

    [min[0], min[1], min[2], max[0], max[1], max[2]]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a triangle from coordinate triples.
pub fn make_triangle(points: [[Real; 3]; 3]) -> Triangle {
    let [a, b, c] = points.map(|[x, y, z]| Point3::new(x, y, z));
    Triangle::new(a, b, c)
}

/// Triangles in a canonical order, for comparing outputs as multisets.
pub fn sorted(triangles: &[Triangle]) -> Vec<Triangle> {
    let mut sorted = triangles.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.vertices.iter().flat_map(|p| p.coords.iter().copied());
        let b = b.vertices.iter().flat_map(|p| p.coords.iter().copied());
        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Route `tracing` output through the test harness.
/// `RUST_LOG=mesh_boolean=trace` shows recipe steps.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
