//! `Mesh` struct and implementations of the `CSGOps` trait for `Mesh`

use crate::boolean;
use crate::errors::CsgError;
use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use crate::mesh::triangle::Triangle;
use crate::traits::{CSGOps, TriangleSource};
use nalgebra::{Matrix4, Point3, Vector3};
use std::sync::OnceLock;

pub mod bsp;
pub mod plane;
pub mod shapes;
pub mod triangle;

#[cfg(feature = "hashmap")]
pub mod weld;

/// An indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Point3<Real>>,

    /// One entry per face, counter-clockwise when seen from outside
    pub indices: Vec<[u32; 3]>,

    /// Per-vertex normals, parallel to `positions`
    pub normals: Vec<Vector3<Real>>,

    /// Lazily calculated AABB that spans `positions`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from flat buffers: `x, y, z` triples and `a, b, c` index triples.
    pub fn from_buffers(positions: &[Real], indices: &[u32]) -> Result<Self, CsgError> {
        if positions.len() % 3 != 0 {
            return Err(CsgError::InvalidBufferLength {
                name: "position",
                len: positions.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(CsgError::InvalidBufferLength {
                name: "index",
                len: indices.len(),
            });
        }

        let positions: Vec<Point3<Real>> = positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect();

        let indices: Vec<[u32; 3]> = indices
            .chunks_exact(3)
            .map(|f| [f[0], f[1], f[2]])
            .collect();

        if let Some((face, &index)) = indices
            .iter()
            .enumerate()
            .flat_map(|(face, f)| f.iter().map(move |i| (face, i)))
            .find(|&(_, &i)| i as usize >= positions.len())
        {
            return Err(CsgError::IndexOutOfRange {
                face,
                index: index as usize,
                vertex_count: positions.len(),
            });
        }

        let mut mesh = Mesh {
            positions,
            indices,
            ..Default::default()
        };
        mesh.compute_normals();
        Ok(mesh)
    }

    /// Build a mesh from a triangle soup.
    ///
    /// Every triangle gets three vertices of its own and one face; nothing is shared.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let positions = triangles
            .iter()
            .flat_map(|t| t.vertices)
            .collect::<Vec<_>>();
        let indices = (0..triangles.len() as u32)
            .map(|f| [3 * f, 3 * f + 1, 3 * f + 2])
            .collect();

        let mut mesh = Mesh {
            positions,
            indices,
            ..Default::default()
        };
        mesh.compute_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Recompute per-vertex normals as the area-weighted average of adjacent face normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];

        for &[a, b, c] in &self.indices {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            // unnormalized: length is twice the face area
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            let face_normal = (pb - pa).cross(&(pc - pa));
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }

        self.normals = normals
            .into_iter()
            .map(|n| n.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros))
            .collect();
    }

    /// Positions flattened to `x, y, z` triples.
    pub fn position_buffer(&self) -> Vec<Real> {
        self.positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    /// Face indices flattened to `a, b, c` triples.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    /// Signed enclosed volume (divergence theorem). Positive for a closed,
    /// outward-wound mesh; meaningless for open ones.
    pub fn volume(&self) -> Real {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let a = self.positions[a as usize].coords;
                let b = self.positions[b as usize].coords;
                let c = self.positions[c as usize].coords;
                a.dot(&b.cross(&c))
            })
            .sum::<Real>()
            / 6.0
    }

    /// Total surface area of all faces.
    pub fn surface_area(&self) -> Real {
        self.triangles().iter().map(Triangle::area).sum()
    }
}

impl TriangleSource for Mesh {
    fn face_count(&self) -> usize {
        self.indices.len()
    }

    fn face(&self, face: usize) -> [usize; 3] {
        self.indices[face].map(|i| i as usize)
    }

    fn position(&self, index: usize) -> Point3<Real> {
        self.positions[index]
    }
}

impl CSGOps for Mesh {
    /// Return a new Mesh representing union of the two Meshes.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Mesh) -> Mesh {
        boolean::union(self, other)
    }

    /// Return a new Mesh representing difference of the two Meshes.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Mesh) -> Mesh {
        boolean::difference(self, other)
    }

    /// Return a new Mesh representing intersection of the two Meshes.
    ///
    /// ```text
    /// let c = a.intersection(b);
    ///     +-------+
    ///     |       |
    ///     |   a   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn intersection(&self, other: &Mesh) -> Mesh {
        boolean::intersection(self, other)
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// Mirroring transforms (negative determinant) also reverse the face
    /// winding so the mesh stays outward-facing.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh {
        let mut mesh = self.clone();
        for p in &mut mesh.positions {
            *p = mat.transform_point(p);
        }

        if mat.fixed_view::<3, 3>(0, 0).determinant() < 0.0 {
            for face in &mut mesh.indices {
                face.swap(1, 2);
            }
        }

        mesh.compute_normals();
        mesh.invalidate_bounding_box();
        mesh
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] indicating the 3D bounds of all `positions`.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let Some(first) = self.positions.first() else {
                // no vertices: a trivial AABB at origin
                return Aabb::new(Point3::origin(), Point3::origin());
            };

            let (mins, maxs) = self
                .positions
                .iter()
                .fold((*first, *first), |(mins, maxs), p| {
                    (mins.inf(p), maxs.sup(p))
                });
            Aabb::new(mins, maxs)
        })
    }

    /// Invalidates object's cached bounding box.
    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Invert this Mesh (flip inside vs. outside)
    fn inverse(&self) -> Mesh {
        let mut mesh = self.clone();
        for face in &mut mesh.indices {
            face.swap(1, 2);
        }
        mesh.compute_normals();
        mesh
    }
}
