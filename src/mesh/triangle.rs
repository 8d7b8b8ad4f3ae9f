//! Free-standing triangles: the unit of geometry the BSP tree partitions.

use crate::errors::CsgError;
use crate::float_types::Real;
use crate::mesh::plane::{Plane, PointSide};
use nalgebra::Point3;

/// Three positions in counter-clockwise (front-facing) order.
///
/// Triangles carry their own copies of the vertex positions, so a list of
/// them forms a "soup" with no shared topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<Real>; 3],
}

impl Triangle {
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    /// The plane this triangle lies in, oriented by its winding.
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.vertices;
        Plane::from_points(a, b, c)
    }

    /// Like [`Triangle::plane`], but fails for zero-area triangles.
    pub fn try_plane(&self) -> Result<Plane, CsgError> {
        let [a, b, c] = self.vertices;
        Plane::try_from_points(a, b, c)
    }

    /// Reverse the winding by swapping the second and third vertex.
    pub fn flip(&mut self) {
        self.vertices.swap(1, 2);
    }

    /// Number of vertices strictly in front of and strictly behind `plane`.
    pub fn side_counts(&self, plane: &Plane) -> (usize, usize) {
        self.vertices
            .iter()
            .fold((0, 0), |(front, back), v| match plane.classify_point(v) {
                PointSide::Front => (front + 1, back),
                PointSide::Back => (front, back + 1),
                PointSide::On => (front, back),
            })
    }

    pub fn area(&self) -> Real {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    pub fn centroid(&self) -> Point3<Real> {
        let [a, b, c] = self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }
}
