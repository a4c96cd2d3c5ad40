//! polyscene
//!
//! A small wgpu renderer for hierarchical scenes built from procedurally
//! generated meshes. Cubes, cylinders, ellipsoids and tori are generated on the
//! CPU once, uploaded once, and then only their transforms, materials and the
//! lights around them change from frame to frame.
//!
//! High-level modules
//! - `camera`: camera, projection and the camera uniform
//! - `config`: window, camera and asset settings
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: vertices, meshes, materials, lights and the scene graph
//! - `error`: typed errors for geometry and light slots
//! - `flow`: the event loop driving animation and rendering
//! - `pipelines`: the scene pipeline and its uniform layouts
//! - `render`: draw-call composition
//! - `resources`: mesh generators and asset loading
//! - `scenes`: the demo scenes
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scenes;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use wgpu;
