//! Re-welding of triangle-soup meshes.
//!
//! Boolean results give every triangle its own three vertices. Welding merges
//! vertices that share a position (after quantization to `tolerance`) so the
//! result has shared topology and smooth per-vertex normals again.

use crate::float_types::Real;
use crate::mesh::Mesh;
use hashbrown::HashMap;
use nalgebra::Point3;

/// Grid cell of a position quantized to `1 / scale`.
type CellKey = (i64, i64, i64);

fn quantize(p: &Point3<Real>, scale: Real) -> CellKey {
    (
        (p.x * scale).round() as i64,
        (p.y * scale).round() as i64,
        (p.z * scale).round() as i64,
    )
}

impl Mesh {
    /// Return a copy of this mesh with coincident vertices merged.
    ///
    /// Two vertices are merged when their positions round to the same cell of a
    /// grid with spacing `tolerance`; the first one encountered keeps its position.
    /// Faces that collapse to fewer than three distinct vertices are dropped.
    pub fn weld_vertices(&self, tolerance: Real) -> Mesh {
        let scale = 1.0 / tolerance.max(Real::EPSILON);

        let mut cells: HashMap<CellKey, u32> = HashMap::with_capacity(self.positions.len());
        let mut positions = Vec::new();
        let remap: Vec<u32> = self
            .positions
            .iter()
            .map(|p| {
                *cells.entry(quantize(p, scale)).or_insert_with(|| {
                    positions.push(*p);
                    (positions.len() - 1) as u32
                })
            })
            .collect();

        let indices = self
            .indices
            .iter()
            .map(|face| face.map(|i| remap[i as usize]))
            .filter(|&[a, b, c]| a != b && b != c && a != c)
            .collect();

        let mut mesh = Mesh {
            positions,
            indices,
            ..Default::default()
        };
        mesh.compute_normals();
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TriangleSource;

    #[test]
    fn soup_cube_welds_back_to_eight_vertices() {
        let soup = Mesh::from_triangles(&Mesh::cube(1.0).triangles());
        assert_eq!(soup.vertex_count(), 36);

        let welded = soup.weld_vertices(1e-6);
        assert_eq!(welded.vertex_count(), 8);
        assert_eq!(welded.face_count(), 12);
    }

    #[test]
    fn merging_follows_grid_cells() {
        let with_fourth = |x: Real| {
            Mesh::from_buffers(
                &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, 0.0, 0.0],
                &[0, 1, 2, 3, 1, 2],
            )
            .expect("valid buffers")
        };

        // same cell as the origin
        assert_eq!(with_fourth(0.00049).weld_vertices(0.001).vertex_count(), 3);
        // closer than the spacing, but across the cell boundary at 0.0005
        assert_eq!(with_fourth(0.00051).weld_vertices(0.001).vertex_count(), 4);
    }

    #[test]
    fn sliver_faces_are_dropped() {
        let mesh = Mesh::from_buffers(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1e-9, 0.0, 1.0, 0.0],
            &[0, 1, 2, 0, 1, 3],
        )
        .expect("valid buffers");

        let welded = mesh.weld_vertices(1e-6);
        assert_eq!(welded.vertex_count(), 3);
        assert_eq!(welded.face_count(), 1);
    }
}
