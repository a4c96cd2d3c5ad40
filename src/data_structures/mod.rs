//! Engine data structures.
//!
//! - `vertex` holds the interleaved vertex record and its GPU layout
//! - `mesh` contains generated meshes and their uploaded buffers
//! - `color` has vertex coloring modes and named colors
//! - `material` holds Phong material parameters
//! - `light` defines lights and the fixed table of light slots
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `scene_graph` enables hierarchical scene organization

pub mod color;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene_graph;
pub mod texture;
pub mod vertex;
