/**
 * Everything that produces data for the GPU: procedural meshes and image assets.
 */
pub mod primitives;
pub mod texture;
