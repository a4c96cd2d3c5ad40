//! Ring torus lying in the xy plane.

use std::f64::consts::TAU;

use cgmath::{vec2, vec3};

use crate::{
    data_structures::{
        color::{CYAN, Coloring},
        mesh::MeshData,
        vertex::Vertex,
    },
    error::{GeometryError, positive},
};

pub const MIN_SIDES: usize = 3;
pub const MIN_RINGS: usize = 3;

/// Torus whose tube of radius `inner_radius` follows a circle of radius
/// `outer_radius` around the z axis.
///
/// Vertex `i * nsides + j` sits on ring `i` (angle around z) and side `j`
/// (angle around the tube). Both loops wrap in the index buffer, so the mesh
/// is closed. Texture coordinates are `(i / (rings - 1), j / (nsides - 1))`
/// and therefore jump back to zero across the wrap.
#[derive(Clone, Debug, PartialEq)]
pub struct Torus {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub nsides: usize,
    pub rings: usize,
    pub coloring: Coloring,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            inner_radius: 0.25,
            outer_radius: 0.5,
            nsides: 36,
            rings: 36,
            coloring: Coloring::Flat(CYAN),
        }
    }
}

impl Torus {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, nsides: usize, rings: usize) -> Self {
        self.nsides = nsides;
        self.rings = rings;
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
        self.rings * self.nsides
    }

    fn check(&self) -> Result<(), GeometryError> {
        let inner = positive("torus", "inner_radius", self.inner_radius)?;
        let outer = positive("torus", "outer_radius", self.outer_radius)?;
        if inner >= outer {
            return Err(GeometryError::InvalidTorusRadii { inner, outer });
        }
        if self.rings < MIN_RINGS {
            return Err(GeometryError::TooFewStacks {
                shape: "torus",
                min: MIN_RINGS,
                got: self.rings,
            });
        }
        if self.nsides < MIN_SIDES {
            return Err(GeometryError::TooFewSlices {
                shape: "torus",
                min: MIN_SIDES,
                got: self.nsides,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        self.check()?;
        let (rings, sides) = (self.rings, self.nsides);
        let (r, big_r) = (self.inner_radius, self.outer_radius);
        let mut mesh = MeshData::with_capacity(self.vertex_count(), 6 * rings * sides);

        for i in 0..rings {
            let (sin_theta, cos_theta) = (TAU * i as f64 / rings as f64).sin_cos();
            for j in 0..sides {
                let (sin_phi, cos_phi) = (TAU * j as f64 / sides as f64).sin_cos();
                let along = big_r + r * cos_phi;
                let position = vec3(along * cos_theta, along * sin_theta, r * sin_phi);
                let normal = vec3(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi);
                let uv = vec2(
                    i as f64 / (rings - 1) as f64,
                    j as f64 / (sides - 1) as f64,
                );
                mesh.add_vertex(Vertex::new(
                    position,
                    normal,
                    self.coloring.color_for(normal),
                    uv,
                ));
            }
        }

        let at = |i: usize, j: usize| ((i % rings) * sides + j % sides) as u32;
        for i in 0..rings {
            for j in 0..sides {
                let cur = at(i, j);
                let next_ring = at(i + 1, j);
                let next_side = at(i, j + 1);
                let diagonal = at(i + 1, j + 1);
                mesh.add_triangle(cur, next_ring, next_side);
                mesh.add_triangle(next_side, next_ring, diagonal);
            }
        }

        debug_assert!(mesh.validate().is_ok());
        Ok(mesh)
    }
}
