//! Render composition.
//!
//! This module defines the [`Render`] enum, which is what scene content hands
//! to the frame loop. The loop flattens it into a list of [`DrawCall`]s and
//! issues one indexed draw per call through the scene pipeline.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the composable description of what to draw
//! - [`DrawCall<'a>`] references the buffers and bind groups of one mesh

use crate::{data_structures::scene_graph::RenderMode, pipelines::light::LightResources};

/// Everything needed to draw one uploaded mesh.
///
/// `texture_group` is `None` for nodes without a texture; the frame loop binds
/// the context's white fallback texture for those.
pub struct DrawCall<'a> {
    pub name: &'a str,
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub amount: u32,
    pub node_group: &'a wgpu::BindGroup,
    pub texture_group: Option<&'a wgpu::BindGroup>,
    pub mode: RenderMode,
}

/// Specifies what should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Draw(DrawCall)` renders a single mesh
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
pub enum Render<'a> {
    None,
    Draw(DrawCall<'a>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Flatten into draw calls, preserving order.
    pub fn flatten(self, calls: &mut Vec<DrawCall<'a>>) {
        match self {
            Render::Draw(call) => calls.push(call),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.flatten(calls)),
            Render::None => (),
        }
    }

    /// Issue every draw call on `render_pass`, which must already have the
    /// scene pipeline and camera group set.
    pub(crate) fn draw(
        self,
        render_pass: &mut wgpu::RenderPass<'_>,
        lights: &LightResources,
        fallback_texture: &wgpu::BindGroup,
    ) {
        let mut calls = Vec::new();
        self.flatten(&mut calls);
        render_pass.set_bind_group(1, &lights.bind_group, &[]);
        for call in calls {
            if call.amount == 0 {
                log::warn!("you attempted to render {} with zero indices", call.name);
                continue;
            }
            log::trace!("draw {} as {:?}", call.name, call.mode);
            render_pass.set_bind_group(2, call.node_group, &[]);
            render_pass.set_bind_group(3, call.texture_group.unwrap_or(fallback_texture), &[]);
            render_pass.set_vertex_buffer(0, call.vertex.slice(..));
            render_pass.set_index_buffer(call.index.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..call.amount, 0, 0..1);
        }
    }
}
