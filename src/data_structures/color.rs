//! Vertex coloring and a few named colors used by the demo scenes.

use cgmath::{Vector3, vec3};

pub const BLUE: [f64; 3] = [0.0, 0.0, 1.0];
pub const CYAN: [f64; 3] = [0.0, 1.0, 1.0];
pub const PINK: [f64; 3] = [1.0, 0.6, 0.6];
pub const SOFTRED: [f64; 3] = [0.75, 0.1, 0.1];
pub const SOFTGREEN: [f64; 3] = [0.1, 0.75, 0.1];
pub const SOFTBLUE: [f64; 3] = [0.1, 0.1, 0.75];
pub const WHITE: [f64; 3] = [1.0, 1.0, 1.0];

/// How a generator fills the color channel of its vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coloring {
    /// Every vertex gets the same color.
    Flat([f64; 3]),
    /// Color encodes the vertex normal as `(n + 1) / 2`, for debugging.
    NormalEncoded,
}

impl Coloring {
    pub fn color_for(&self, normal: Vector3<f64>) -> Vector3<f64> {
        match self {
            Coloring::Flat(c) => vec3(c[0], c[1], c[2]),
            Coloring::NormalEncoded => (normal + vec3(1.0, 1.0, 1.0)) * 0.5,
        }
    }
}

impl Default for Coloring {
    fn default() -> Self {
        Coloring::Flat(WHITE)
    }
}

impl From<[f64; 3]> for Coloring {
    fn from(color: [f64; 3]) -> Self {
        Coloring::Flat(color)
    }
}
