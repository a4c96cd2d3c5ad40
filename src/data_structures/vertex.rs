//! Interleaved vertex records.
//!
//! Generators work with [`Vertex`] in double precision; the GPU only ever sees
//! [`VertexRaw`], the packed `f32` form with a fixed stride of eleven scalars.

use cgmath::{Vector2, Vector3};

/// Number of `f32` scalars in one [`VertexRaw`].
pub const VERTEX_STRIDE: usize = 11;
/// Scalar offset of the position inside a vertex record.
pub const POSITION_OFFSET: usize = 0;
/// Scalar offset of the normal inside a vertex record.
pub const NORMAL_OFFSET: usize = 3;
/// Scalar offset of the color inside a vertex record.
pub const COLOR_OFFSET: usize = 6;
/// Scalar offset of the texture coordinates inside a vertex record.
pub const UV_OFFSET: usize = 9;

/// Anything that can describe its own vertex buffer layout to a pipeline.
pub trait BufferLayout {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single mesh vertex as produced by the primitive generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub color: Vector3<f64>,
    pub uv: Vector2<f64>,
}

impl Vertex {
    pub fn new(
        position: Vector3<f64>,
        normal: Vector3<f64>,
        color: Vector3<f64>,
        uv: Vector2<f64>,
    ) -> Self {
        Self {
            position,
            normal,
            color,
            uv,
        }
    }

    pub fn to_raw(&self) -> VertexRaw {
        VertexRaw {
            position: [
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ],
            normal: [
                self.normal.x as f32,
                self.normal.y as f32,
                self.normal.z as f32,
            ],
            color: [
                self.color.x as f32,
                self.color.y as f32,
                self.color.z as f32,
            ],
            uv: [self.uv.x as f32, self.uv.y as f32],
        }
    }
}

/**
 * The raw vertex is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexRaw {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexRaw {
    /// The record flattened into its eleven scalars, in buffer order.
    pub fn as_scalars(&self) -> [f32; VERTEX_STRIDE] {
        bytemuck::cast(*self)
    }
}

const fn scalar_offset(scalars: usize) -> wgpu::BufferAddress {
    (scalars * std::mem::size_of::<f32>()) as wgpu::BufferAddress
}

/**
 * Shader locations 0..=3 map to position, normal, color and uv.
 * The offsets are fixed; a shader must not assume anything else about the record.
 */
impl BufferLayout for VertexRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
            wgpu::VertexAttribute {
                offset: scalar_offset(POSITION_OFFSET),
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: scalar_offset(NORMAL_OFFSET),
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: scalar_offset(COLOR_OFFSET),
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: scalar_offset(UV_OFFSET),
                shader_location: 3,
                format: wgpu::VertexFormat::Float32x2,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: scalar_offset(VERTEX_STRIDE),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
