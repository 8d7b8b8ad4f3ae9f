//! Simple closed solids, centered on the origin.

use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;

impl Mesh {
    /// An axis-aligned box centered at the origin, 8 shared vertices and 12 triangles.
    ///
    /// Vertex `i` sits at `+x` when bit 2 of `i` is set, `+y` for bit 1 and `+z` for bit 0.
    /// Each side is emitted as two triangles splitting the quad along the same diagonal.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Mesh {
        let (hx, hy, hz) = (width * 0.5, length * 0.5, height * 0.5);
        let sign = |bit: bool, half: Real| if bit { half } else { -half };

        let positions = (0..8u32)
            .map(|i| {
                Point3::new(
                    sign(i & 4 != 0, hx),
                    sign(i & 2 != 0, hy),
                    sign(i & 1 != 0, hz),
                )
            })
            .collect();

        // quads, counter-clockwise seen from outside
        const SIDES: [[u32; 4]; 6] = [
            [0, 1, 3, 2], // -x
            [4, 6, 7, 5], // +x
            [0, 4, 5, 1], // -y
            [2, 3, 7, 6], // +y
            [0, 2, 6, 4], // -z
            [1, 5, 7, 3], // +z
        ];
        let indices = SIDES
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect();

        let mut mesh = Mesh {
            positions,
            indices,
            ..Default::default()
        };
        mesh.compute_normals();
        mesh
    }

    /// A cube with edge length `size`, centered at the origin.
    pub fn cube(size: Real) -> Mesh {
        Self::cuboid(size, size, size)
    }

    /// A regular tetrahedron inscribed in the cube `[-half, half]³`.
    pub fn tetrahedron(half: Real) -> Mesh {
        let positions = [
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ]
        .iter()
        .map(|&[x, y, z]| Point3::new(x * half, y * half, z * half))
        .collect();

        let mut mesh = Mesh {
            positions,
            indices: vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
            ..Default::default()
        };
        mesh.compute_normals();
        mesh
    }
}
