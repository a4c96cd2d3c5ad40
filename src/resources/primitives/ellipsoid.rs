//! Ellipsoid swept pole to pole around the y axis.

use std::f64::consts::{PI, TAU};

use cgmath::{InnerSpace, vec2, vec3};

use crate::{
    data_structures::{
        color::{Coloring, SOFTBLUE},
        mesh::MeshData,
        vertex::Vertex,
    },
    error::{GeometryError, positive},
};

pub const MIN_STACKS: usize = 2;
pub const MIN_SLICES: usize = 3;

/// Ellipsoid with semi-axes `radius_x`, `radius_y` and `radius_z`.
///
/// The grid has `stacks + 1` latitude rows from the `+y` pole (`phi = 0`) to
/// the `-y` pole (`phi = pi`) and `slices + 1` longitude columns; the last
/// column repeats the first one in space so texture coordinates run from 0 to
/// 1 without wrapping. All vertices of a pole row sit on the same point, and
/// triangles that collapse there are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    pub radius_x: f64,
    pub radius_y: f64,
    pub radius_z: f64,
    pub stacks: usize,
    pub slices: usize,
    pub coloring: Coloring,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self {
            radius_x: 0.6,
            radius_y: 0.3,
            radius_z: 0.9,
            stacks: 18,
            slices: 36,
            coloring: Coloring::Flat(SOFTBLUE),
        }
    }
}

impl Ellipsoid {
    pub fn new(radius_x: f64, radius_y: f64, radius_z: f64) -> Self {
        Self {
            radius_x,
            radius_y,
            radius_z,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::new(radius, radius, radius)
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

    pub fn vertex_count(&self) -> usize {
        (self.stacks + 1) * (self.slices + 1)
    }

    fn check(&self) -> Result<(), GeometryError> {
        positive("ellipsoid", "radius_x", self.radius_x)?;
        positive("ellipsoid", "radius_y", self.radius_y)?;
        positive("ellipsoid", "radius_z", self.radius_z)?;
        if self.stacks < MIN_STACKS {
            return Err(GeometryError::TooFewStacks {
                shape: "ellipsoid",
                min: MIN_STACKS,
                got: self.stacks,
            });
        }
        if self.slices < MIN_SLICES {
            return Err(GeometryError::TooFewSlices {
                shape: "ellipsoid",
                min: MIN_SLICES,
                got: self.slices,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        self.check()?;
        let (s, n) = (self.stacks, self.slices);
        let (a, b, c) = (self.radius_x, self.radius_y, self.radius_z);
        let mut mesh = MeshData::with_capacity(self.vertex_count(), 6 * s * n);

        for i in 0..=s {
            // Exact values on the poles so their vertices compare equal.
            let (sin_phi, cos_phi) = match i {
                0 => (0.0, 1.0),
                i if i == s => (0.0, -1.0),
                _ => (PI * i as f64 / s as f64).sin_cos(),
            };
            for j in 0..=n {
                let (sin_theta, cos_theta) = if j == n {
                    (0.0, 1.0)
                } else {
                    (TAU * j as f64 / n as f64).sin_cos()
                };
                let position = vec3(a * cos_theta * sin_phi, b * cos_phi, c * sin_theta * sin_phi);
                let normal = vec3(
                    position.x / (a * a),
                    position.y / (b * b),
                    position.z / (c * c),
                )
                .normalize();
                let uv = vec2(j as f64 / n as f64, i as f64 / s as f64);
                mesh.add_vertex(Vertex::new(
                    position,
                    normal,
                    self.coloring.color_for(normal),
                    uv,
                ));
            }
        }

        let at = |i: usize, j: usize| (i * (n + 1) + j) as u32;
        for i in 0..s {
            for j in 0..n {
                mesh.add_triangle_non_degenerate(at(i, j), at(i, j + 1), at(i + 1, j));
                mesh.add_triangle_non_degenerate(at(i + 1, j), at(i, j + 1), at(i + 1, j + 1));
            }
        }

        debug_assert!(mesh.validate().is_ok());
        Ok(mesh)
    }
}
