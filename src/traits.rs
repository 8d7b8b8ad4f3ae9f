use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::float_types::Real;
use crate::mesh::triangle::Triangle;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Read access to an indexed triangle mesh: the input side of every boolean operation.
pub trait TriangleSource {
    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// The three vertex indices of face `face`.
    fn face(&self, face: usize) -> [usize; 3];

    /// Position of vertex `index`.
    fn position(&self, index: usize) -> Point3<Real>;

    /// Expand the indexed faces into a triangle soup, one [`Triangle`] per face.
    fn triangles(&self) -> Vec<Triangle> {
        (0..self.face_count())
            .map(|face| {
                let [a, b, c] = self.face(face);
                Triangle::new(self.position(a), self.position(b), self.position(c))
            })
            .collect()
    }
}

/// A triangle soup is its own (non-shared) index space:
/// vertex `3 * f + k` is corner `k` of face `f`.
impl TriangleSource for [Triangle] {
    fn face_count(&self) -> usize {
        self.len()
    }

    fn face(&self, face: usize) -> [usize; 3] {
        [3 * face, 3 * face + 1, 3 * face + 2]
    }

    fn position(&self, index: usize) -> Point3<Real> {
        self[index / 3].vertices[index % 3]
    }

    fn triangles(&self) -> Vec<Triangle> {
        self.to_vec()
    }
}

/// Boolean operations + transformations
pub trait CSGOps: Sized + Clone {
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn invalidate_bounding_box(&mut self);
    fn inverse(&self) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Rotates by x_deg, y_deg, z_deg (applied in that order)
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Scales by sx, sy, sz
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }
}
