//! Scene graph and hierarchical scene organization.
//!
//! A [`SceneNode`] owns its children, an optional generated mesh and the GPU
//! buffers created from it. World transforms are composed top-down as
//!
//! ```text
//! world = parent * T(position) * R(w, w_axis) * R(v, v_axis) * R(u, u_axis)
//! ```
//!
//! and drawing walks the tree depth-first in pre-order.

use cgmath::{Deg, InnerSpace, Matrix, Matrix4, SquareMatrix, Vector3};

use crate::{
    context::{Context, GPUResource},
    data_structures::{
        material::Material,
        mesh::{GpuMesh, MeshData},
        texture::TextureBinding,
    },
    pipelines::scene::NodeUniform,
    render::{DrawCall, Render},
};

/// Selects which shading path a node's draw call takes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Interpolated vertex colors, no lighting.
    #[default]
    VertexColor,
    /// Normals encoded as colors, for debugging.
    NormalColor,
    /// Texture only, no lighting.
    Texture,
    /// Phong lighting with the node's material.
    Lit,
    /// Phong lighting modulated by the texture.
    LitTexture,
}

impl RenderMode {
    /// The value the fragment shader switches on.
    pub fn shader_id(self) -> u32 {
        match self {
            RenderMode::VertexColor => 0,
            RenderMode::NormalColor => 1,
            RenderMode::Texture => 2,
            RenderMode::Lit => 3,
            RenderMode::LitTexture => 4,
        }
    }

    pub fn uses_texture(self) -> bool {
        matches!(self, RenderMode::Texture | RenderMode::LitTexture)
    }

    pub fn is_lit(self) -> bool {
        matches!(self, RenderMode::Lit | RenderMode::LitTexture)
    }
}

/// One of the three node-local rotation axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    U,
    V,
    W,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::U => 0,
            Axis::V => 1,
            Axis::W => 2,
        }
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Translation plus three independent rotation angles (degrees) about the
/// node-local u, v and w axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vector3<f32>,
    pub angles: [f32; 3],
    pub axes: [Vector3<f32>; 3],
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            angles: [0.0; 3],
            axes: [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()],
        }
    }
}

impl LocalTransform {
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let rotate = |axis: Axis| {
            Matrix4::from_axis_angle(
                self.axes[axis.index()].normalize(),
                Deg(self.angles[axis.index()]),
            )
        };
        Matrix4::from_translation(self.position)
            * rotate(Axis::W)
            * rotate(Axis::V)
            * rotate(Axis::U)
    }
}

/// Per-frame behavior of a node, advanced by [`SceneNode::animation_update`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Behavior {
    #[default]
    Static,
    /// Adds `speeds[k]` degrees to angle u, v and w every frame.
    Spin { speeds: [f32; 3] },
    /// Advances the v angle by `speed` degrees per frame and places the node on
    /// the circle of `radius` in the local xz plane matching that angle.
    Orbit { radius: f32, speed: f32 },
}

/// Buffers and bind groups a node draws with.
#[derive(Debug)]
pub struct NodeGpu {
    pub mesh: GpuMesh,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub texture_bind_group: Option<wgpu::BindGroup>,
}

#[derive(Debug)]
pub struct SceneNode {
    pub name: String,
    local: LocalTransform,
    world: Matrix4<f32>,
    mesh: Option<MeshData>,
    gpu: Option<NodeGpu>,
    material: Option<Material>,
    texture: Option<TextureBinding>,
    render_mode: RenderMode,
    behavior: Behavior,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// A pure group/transform node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local: LocalTransform::default(),
            world: Matrix4::identity(),
            mesh: None,
            gpu: None,
            material: None,
            texture: None,
            render_mode: RenderMode::default(),
            behavior: Behavior::default(),
            children: Vec::new(),
        }
    }

    pub fn with_mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::new(name)
        }
    }

    pub fn at(mut self, position: Vector3<f32>) -> Self {
        self.local.position = position;
        self
    }

    pub fn rotated(mut self, axis: Axis, degrees: f32) -> Self {
        self.rotate(axis, degrees);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture = Some(TextureBinding::new(path));
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child and return its index.
    pub fn add_child(&mut self, child: SceneNode) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<SceneNode> {
        &mut self.children
    }

    /// First node named `name` in pre-order, including `self`.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    pub fn mesh(&self) -> Option<&MeshData> {
        self.mesh.as_ref()
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    pub fn texture(&self) -> Option<&TextureBinding> {
        self.texture.as_ref()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn local_transform(&self) -> &LocalTransform {
        &self.local
    }

    pub fn position(&self) -> Vector3<f32> {
        self.local.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.local.position = position;
    }

    pub fn angle(&self, axis: Axis) -> f32 {
        self.local.angles[axis.index()]
    }

    pub fn set_angle(&mut self, axis: Axis, degrees: f32) {
        self.local.angles[axis.index()] = wrap_degrees(degrees);
    }

    /// Add `degrees` to the angle about `axis`, modulo 360.
    pub fn rotate(&mut self, axis: Axis, degrees: f32) {
        let i = axis.index();
        self.local.angles[i] = wrap_degrees(self.local.angles[i] + degrees);
    }

    /// Replace the three local rotation axes, e.g. to spin about a tilted axis.
    pub fn set_axes(&mut self, u: Vector3<f32>, v: Vector3<f32>, w: Vector3<f32>) {
        self.local.axes = [u, v, w];
    }

    /// World transform as of the last [`update_world_transforms`](Self::update_world_transforms).
    pub fn world_transform(&self) -> Matrix4<f32> {
        self.world
    }

    pub fn update_world_transforms(&mut self, parent: &Matrix4<f32>) {
        self.world = *parent * self.local.to_matrix();
        let world = self.world;
        for child in self.children.iter_mut() {
            child.update_world_transforms(&world);
        }
    }

    /// Advance this node's own behavior, then every descendant's.
    pub fn animation_update(&mut self) {
        match self.behavior {
            Behavior::Static => (),
            Behavior::Spin { speeds } => {
                for (axis, speed) in [Axis::U, Axis::V, Axis::W].into_iter().zip(speeds) {
                    self.rotate(axis, speed);
                }
            }
            Behavior::Orbit { radius, speed } => {
                self.rotate(Axis::V, speed);
                let theta = self.angle(Axis::V).to_radians();
                self.local.position.x = radius * theta.cos();
                self.local.position.z = -radius * theta.sin();
            }
        }
        for child in self.children.iter_mut() {
            child.animation_update();
        }
    }

    /// Nodes that carry a mesh, in depth-first pre-order.
    pub fn draw_order(&self) -> Vec<&SceneNode> {
        let mut order = Vec::new();
        self.collect_drawable(&mut order);
        order
    }

    fn collect_drawable<'a>(&'a self, order: &mut Vec<&'a SceneNode>) {
        if self.mesh.is_some() {
            order.push(self);
        }
        for child in &self.children {
            child.collect_drawable(order);
        }
    }

    /// Upload meshes and create per-node uniforms and texture bindings for the
    /// whole subtree. Nodes that already own GPU resources are left alone.
    pub fn init_gpu_resources(&mut self, ctx: &mut Context) {
        if self.gpu.is_none() {
            if let Some(mesh) = &self.mesh {
                let mesh = mesh.upload(&ctx.device, &self.name);
                let uniform = self.uniform();
                let (uniform_buffer, bind_group) = ctx.scene.mk_node_resources(&ctx.device, uniform);
                let texture_bind_group = match (&self.texture, self.render_mode.uses_texture()) {
                    (Some(binding), true) => Some(ctx.texture_bind_group(&binding.path)),
                    (Some(binding), false) => {
                        log::warn!(
                            "node {} has texture {} but renders as {:?}; texture ignored",
                            self.name,
                            binding.path,
                            self.render_mode
                        );
                        None
                    }
                    (None, true) => {
                        log::warn!(
                            "node {} renders as {:?} without a texture; using white",
                            self.name,
                            self.render_mode
                        );
                        None
                    }
                    (None, false) => None,
                };
                self.gpu = Some(NodeGpu {
                    mesh,
                    uniform_buffer,
                    bind_group,
                    texture_bind_group,
                });
            }
        }
        for child in self.children.iter_mut() {
            child.init_gpu_resources(ctx);
        }
    }

    pub fn gpu(&self) -> Option<&NodeGpu> {
        self.gpu.as_ref()
    }

    /// Uniform block describing this node to the shader.
    pub fn uniform(&self) -> NodeUniform {
        let normal = self
            .world
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(self.world);
        NodeUniform::new(
            self.world,
            normal,
            &self.material.unwrap_or_default(),
            self.render_mode,
        )
    }

    pub fn write_to_buffers(&mut self, queue: &wgpu::Queue) {
        if let Some(gpu) = &self.gpu {
            queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::cast_slice(&[self.uniform()]));
        }
        self.children
            .iter_mut()
            .for_each(|child| child.write_to_buffers(queue));
    }

    /// This node's own draw call, once its mesh is uploaded.
    pub fn draw_call(&self) -> Option<DrawCall<'_>> {
        self.gpu.as_ref().map(|gpu| DrawCall {
            name: &self.name,
            vertex: &gpu.mesh.vertex_buffer,
            index: &gpu.mesh.index_buffer,
            amount: gpu.mesh.num_elements,
            node_group: &gpu.bind_group,
            texture_group: gpu.texture_bind_group.as_ref(),
            mode: self.render_mode,
        })
    }

    /// Draw calls for every uploaded mesh in the subtree, in pre-order.
    pub fn draw_calls(&self) -> Vec<DrawCall<'_>> {
        let mut calls = Vec::new();
        GPUResource::get_render(self).flatten(&mut calls);
        calls
    }
}

impl<'a> GPUResource<'a> for SceneNode {
    fn write_to_buffer(&mut self, ctx: &Context) {
        self.write_to_buffers(&ctx.queue);
    }

    /// A leaf yields its own draw (or nothing); an inner node composes its
    /// own draw followed by each child's subtree.
    fn get_render(&'a self) -> Render<'a> {
        let own = self.draw_call().map_or(Render::None, Render::Draw);
        if self.children.is_empty() {
            return own;
        }
        let mut renders = Vec::with_capacity(self.children.len() + 1);
        renders.push(own);
        renders.extend(self.children.iter().map(|child| child.get_render()));
        Render::Composed(renders)
    }
}
