//! Procedural mesh generators.
//!
//! Each generator is a plain parameter struct with sensible defaults and a
//! `generate` method that validates the parameters before building anything:
//!
//! - [`Cube`] flat-shaded box, 36 unshared vertices
//! - [`Cylinder`] capped elliptical cylinder along z
//! - [`Ellipsoid`] pole-to-pole ellipsoid around y
//! - [`Torus`] closed torus in the xy plane

pub mod cube;
pub mod cylinder;
pub mod ellipsoid;
pub mod torus;

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use ellipsoid::Ellipsoid;
pub use torus::Torus;
