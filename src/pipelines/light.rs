use cgmath::InnerSpace;
use wgpu::util::DeviceExt;

use crate::data_structures::light::{Light, LightMode, LightSlots, MAX_LIGHTS};

pub const LIGHT_MODE_POINT: u32 = 0;
pub const LIGHT_MODE_DIRECTIONAL: u32 = 1;
pub const LIGHT_MODE_SPOT: u32 = 2;

/// One light as the shader sees it.
///
/// `attenuation.xyz` holds the constant, linear and quadratic falloff and
/// `attenuation.w` the cosine of the spot cone half-angle.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub direction: [f32; 4],
    pub attenuation: [f32; 4],
    pub mode: u32,
    pub enabled: u32,
    // Uniforms require 16 byte (4 float) spacing
    _padding: [u32; 2],
}

/// Unit vector along `direction`, or `None` when it has no usable length.
fn unit(direction: cgmath::Vector3<f32>) -> Option<[f32; 3]> {
    let length2 = direction.magnitude2();
    (length2 > 0.0 && length2.is_finite()).then(|| direction.normalize().into())
}

/// Directional and spot lights without a direction are packed disabled.
impl From<&Light> for LightRaw {
    fn from(light: &Light) -> Self {
        let (mode, direction, attenuation): (u32, Option<[f32; 3]>, [f32; 4]) = match light.mode {
            LightMode::Point => (LIGHT_MODE_POINT, Some([0.0; 3]), [1.0, 0.0, 0.0, -1.0]),
            LightMode::Directional { direction } => (
                LIGHT_MODE_DIRECTIONAL,
                unit(direction),
                [1.0, 0.0, 0.0, -1.0],
            ),
            LightMode::Spot {
                direction,
                radial_attenuation: [c, l, q],
                angle_limit,
            } => (
                LIGHT_MODE_SPOT,
                unit(direction),
                [c, l, q, angle_limit.to_radians().cos()],
            ),
        };
        let enabled = direction.is_some() as u32;
        let [x, y, z] = direction.unwrap_or([0.0; 3]);
        Self {
            position: light.position.extend(1.0).into(),
            color: light.color,
            direction: [x, y, z, 0.0],
            attenuation,
            mode,
            enabled,
            _padding: [0; 2],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightRaw; MAX_LIGHTS],
    pub count: u32,
    _padding: [u32; 3],
}

impl From<&LightSlots> for LightsUniform {
    fn from(slots: &LightSlots) -> Self {
        let mut uniform: LightsUniform = bytemuck::Zeroable::zeroed();
        for (i, light) in slots.iter() {
            uniform.lights[i] = light.into();
        }
        uniform.count = uniform.lights.iter().filter(|light| light.enabled == 1).count() as u32;
        uniform
    }
}

/// The light table plus its uniform buffer and bind group (group 1).
#[derive(Debug)]
pub struct LightResources {
    pub slots: LightSlots,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let slots = LightSlots::new();
        let buffer = mk_buffer(device, LightsUniform::from(&slots));
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            slots,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[LightsUniform::from(&self.slots)]),
        );
    }
}

pub fn mk_buffer(device: &wgpu::Device, uniform: LightsUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Buffer"),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}
