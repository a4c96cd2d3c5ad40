//! Axis-aligned box with one flat-shaded quad per face.

use cgmath::{Vector3, vec2, vec3};

use crate::{
    data_structures::{
        color::{BLUE, Coloring},
        mesh::MeshData,
        vertex::Vertex,
    },
    error::{GeometryError, positive},
};

/// Corner sign triples and texture coordinates of each face, counter-clockwise
/// seen from outside. Order: back, front, left, right, top, bottom.
const FACES: [([f64; 3], [([f64; 3], [f64; 2]); 4]); 6] = [
    (
        [0.0, 0.0, -1.0],
        [
            ([-1.0, -1.0, -1.0], [1.0, 0.0]),
            ([-1.0, 1.0, -1.0], [1.0, 1.0]),
            ([1.0, 1.0, -1.0], [0.0, 1.0]),
            ([1.0, -1.0, -1.0], [0.0, 0.0]),
        ],
    ),
    (
        [0.0, 0.0, 1.0],
        [
            ([-1.0, -1.0, 1.0], [0.0, 0.0]),
            ([1.0, -1.0, 1.0], [1.0, 0.0]),
            ([1.0, 1.0, 1.0], [1.0, 1.0]),
            ([-1.0, 1.0, 1.0], [0.0, 1.0]),
        ],
    ),
    (
        [-1.0, 0.0, 0.0],
        [
            ([-1.0, -1.0, -1.0], [0.0, 0.0]),
            ([-1.0, -1.0, 1.0], [1.0, 0.0]),
            ([-1.0, 1.0, 1.0], [1.0, 1.0]),
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
        ],
    ),
    (
        [1.0, 0.0, 0.0],
        [
            ([1.0, -1.0, 1.0], [0.0, 0.0]),
            ([1.0, -1.0, -1.0], [1.0, 0.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([1.0, 1.0, 1.0], [0.0, 1.0]),
        ],
    ),
    (
        [0.0, 1.0, 0.0],
        [
            ([-1.0, 1.0, 1.0], [0.0, 0.0]),
            ([1.0, 1.0, 1.0], [1.0, 0.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
        ],
    ),
    (
        [0.0, -1.0, 0.0],
        [
            ([-1.0, -1.0, -1.0], [0.0, 0.0]),
            ([1.0, -1.0, -1.0], [1.0, 0.0]),
            ([1.0, -1.0, 1.0], [1.0, 1.0]),
            ([-1.0, -1.0, 1.0], [0.0, 1.0]),
        ],
    ),
];

/// A box of `length` × `width` × `height` along x, y and z, centered at the
/// origin.
///
/// Vertices are not shared between faces, so the mesh always has 36 vertices
/// and the index list is simply `0..36`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub coloring: Coloring,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 1.0,
            height: 1.0,
            coloring: Coloring::Flat(BLUE),
        }
    }
}

impl Cube {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            ..Default::default()
        }
    }

    /// A cube with all three edges of the same length.
    pub fn uniform(edge: f64) -> Self {
        Self::new(edge, edge, edge)
    }

    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.coloring = Coloring::Flat(color);
        self
    }

    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        let half = vec3(
            positive("cube", "length", self.length)? / 2.0,
            positive("cube", "width", self.width)? / 2.0,
            positive("cube", "height", self.height)? / 2.0,
        );

        let mut mesh = MeshData::with_capacity(36, 36);
        for (normal, corners) in FACES.iter() {
            let normal = Vector3::from(*normal);
            let color = self.coloring.color_for(normal);
            // Each quad becomes (c0, c1, c2) and (c0, c2, c3), with the corners
            // written out again so no index is shared.
            for corner in [0, 1, 2, 0, 2, 3] {
                let (sign, uv) = corners[corner];
                let position = vec3(sign[0] * half.x, sign[1] * half.y, sign[2] * half.z);
                mesh.add_vertex(Vertex::new(position, normal, color, vec2(uv[0], uv[1])));
            }
        }
        for i in (0..36).step_by(3) {
            mesh.add_triangle(i, i + 1, i + 2);
        }

        debug_assert!(mesh.validate().is_ok());
        Ok(mesh)
    }
}
