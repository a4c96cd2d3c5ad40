//! Capped cylinder with an elliptical cross-section, swept along z.

use std::f64::consts::TAU;

use cgmath::{InnerSpace, vec2, vec3};

use crate::{
    data_structures::{
        color::{Coloring, PINK},
        mesh::MeshData,
        vertex::Vertex,
    },
    error::{GeometryError, positive},
};

pub const MIN_STACKS: usize = 2;
pub const MIN_SLICES: usize = 3;

/// Index of the top cap center vertex.
pub const TOP_POLE: u32 = 0;
/// Index of the bottom cap center vertex.
pub const BOTTOM_POLE: u32 = 1;

/// Cylinder of half-height `radius_z` whose cross-section is the ellipse with
/// semi-axes `radius_x` and `radius_y`.
///
/// Buffer layout: the two pole vertices, the top cap ring, the bottom cap ring,
/// then the side wall as `stacks` rings of `slices` vertices running from
/// `+radius_z` down to `-radius_z`. Cap rings duplicate the outermost side
/// rings so the caps keep their own flat normals along the rim.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub radius_x: f64,
    pub radius_y: f64,
    pub radius_z: f64,
    pub stacks: usize,
    pub slices: usize,
    pub coloring: Coloring,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            radius_x: 0.5,
            radius_y: 0.5,
            radius_z: 0.5,
            stacks: 18,
            slices: 36,
            coloring: Coloring::Flat(PINK),
        }
    }
}

impl Cylinder {
    pub fn new(radius_x: f64, radius_y: f64, radius_z: f64) -> Self {
        Self {
            radius_x,
            radius_y,
            radius_z,
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, stacks: usize, slices: usize) -> Self {
        self.stacks = stacks;
        self.slices = slices;
        self
    }

    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.coloring = Coloring::Flat(color);
        self
    }

    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    /// Index of the first side-wall vertex.
    pub fn side_offset(&self) -> u32 {
        2 + 2 * self.slices as u32
    }

    /// Total number of vertices [`generate`](Self::generate) produces.
    pub fn vertex_count(&self) -> usize {
        self.stacks * self.slices + 2 * self.slices + 2
    }

    fn check(&self) -> Result<(), GeometryError> {
        positive("cylinder", "radius_x", self.radius_x)?;
        positive("cylinder", "radius_y", self.radius_y)?;
        positive("cylinder", "radius_z", self.radius_z)?;
        if self.stacks < MIN_STACKS {
            return Err(GeometryError::TooFewStacks {
                shape: "cylinder",
                min: MIN_STACKS,
                got: self.stacks,
            });
        }
        if self.slices < MIN_SLICES {
            return Err(GeometryError::TooFewSlices {
                shape: "cylinder",
                min: MIN_SLICES,
                got: self.slices,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        self.check()?;
        let (s, n) = (self.stacks, self.slices);
        let (rx, ry, rz) = (self.radius_x, self.radius_y, self.radius_z);
        let mut mesh = MeshData::with_capacity(self.vertex_count(), 6 * n * s);

        let rim = |j: usize| {
            let theta = TAU * j as f64 / n as f64;
            (theta.cos(), theta.sin())
        };

        let up = vec3(0.0, 0.0, 1.0);
        let down = vec3(0.0, 0.0, -1.0);
        let center_uv = vec2(0.5, 0.5);
        mesh.add_vertex(Vertex::new(
            vec3(0.0, 0.0, rz),
            up,
            self.coloring.color_for(up),
            center_uv,
        ));
        mesh.add_vertex(Vertex::new(
            vec3(0.0, 0.0, -rz),
            down,
            self.coloring.color_for(down),
            center_uv,
        ));

        for (z, normal) in [(rz, up), (-rz, down)] {
            let color = self.coloring.color_for(normal);
            for j in 0..n {
                let (c, s) = rim(j);
                let uv = vec2(0.5 + 0.5 * c, 0.5 + 0.5 * s);
                mesh.add_vertex(Vertex::new(vec3(rx * c, ry * s, z), normal, color, uv));
            }
        }

        for i in 0..s {
            let z = rz - 2.0 * rz * i as f64 / (s - 1) as f64;
            for j in 0..n {
                let (c, sn) = rim(j);
                // Gradient of the cross-section ellipse; (cos, sin, 0) for a circle.
                let normal = vec3(c / rx, sn / ry, 0.0).normalize();
                let uv = vec2(j as f64 / n as f64, i as f64 / (s - 1) as f64);
                mesh.add_vertex(Vertex::new(
                    vec3(rx * c, ry * sn, z),
                    normal,
                    self.coloring.color_for(normal),
                    uv,
                ));
            }
        }

        let n32 = n as u32;
        let side = |i: usize, j: usize| self.side_offset() + (i * n + j % n) as u32;
        for i in 0..s - 1 {
            for j in 0..n {
                let cur = side(i, j);
                let next_stack = side(i + 1, j);
                let next_slice = side(i, j + 1);
                let next_both = side(i + 1, j + 1);
                mesh.add_triangle(cur, next_stack, next_slice);
                mesh.add_triangle(next_stack, next_both, next_slice);
            }
        }

        let top_ring = 2;
        let bottom_ring = 2 + n32;
        for j in 0..n32 {
            let next = (j + 1) % n32;
            mesh.add_triangle(TOP_POLE, top_ring + j, top_ring + next);
            mesh.add_triangle(BOTTOM_POLE, bottom_ring + next, bottom_ring + j);
        }

        debug_assert!(mesh.validate().is_ok());
        Ok(mesh)
    }
}
