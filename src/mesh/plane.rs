//! Oriented planes and point classification.

use crate::errors::CsgError;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointSide {
    /// Strictly in the half-space the normal points into.
    Front,
    /// Strictly in the opposite half-space.
    Back,
    /// Within tolerance of the plane itself.
    On,
}

/// A plane in Hessian normal form: every point `p` on it satisfies `normal · p == w`.
///
/// `normal · p - w` is the signed distance of `p` from the plane, positive in front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a (not necessarily unit) normal and an offset.
    ///
    /// The offset is taken as-is, so `w` must already be expressed along the unit normal.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: (p2-p1) × (p3-p1)
    ///
    /// Collinear points are not guarded against: the resulting normal is
    /// non-finite and every point will classify as [`PointSide::On`].
    /// Use [`Plane::try_from_points`] when that has to be detected.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1)).normalize();
        let w = normal.dot(&p1.coords);
        Plane { normal, w }
    }

    /// Like [`Plane::from_points`], but rejects points that do not span a plane.
    pub fn try_from_points(
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
    ) -> Result<Self, CsgError> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.norm_squared() < Real::EPSILON * Real::EPSILON {
            return Err(CsgError::DegeneratePlane {
                a: p1,
                b: p2,
                c: p3,
            });
        }

        let normal = normal.normalize();
        Ok(Plane {
            normal,
            w: normal.dot(&p1.coords),
        })
    }

    #[inline]
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    #[inline]
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// `false` when the plane was built from degenerate input.
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.normal.iter().all(|c| c.is_finite())
    }

    /// Reverse the orientation: front and back half-spaces trade places.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance of `point` from the plane, positive in front.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify `point` using the crate-wide [`EPSILON`].
    #[inline]
    pub fn classify_point(&self, point: &Point3<Real>) -> PointSide {
        self.classify_point_with(point, EPSILON)
    }

    /// Classify `point`, treating anything within `epsilon` of the plane as [`PointSide::On`].
    pub fn classify_point_with(&self, point: &Point3<Real>, epsilon: Real) -> PointSide {
        let distance = self.signed_distance(point);
        if distance > epsilon {
            PointSide::Front
        } else if distance < -epsilon {
            PointSide::Back
        } else {
            // NaN distances (degenerate planes) land here as well
            PointSide::On
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_plane_classifies_everything_on() {
        let plane = Plane::from_points(Point3::origin(), Point3::origin(), Point3::origin());
        assert!(!plane.is_finite());
        assert_eq!(
            plane.classify_point(&Point3::new(10.0, -3.0, 2.0)),
            PointSide::On
        );
    }
}
