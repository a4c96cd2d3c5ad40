//! Render pipelines and the GPU layouts they share.
//!
//! - `light` light table uniform (group 1)
//! - `scene` the scene pipeline, node uniforms (group 2) and texture group (group 3)

pub mod light;
pub mod scene;
