//! The GPU context: device, surface and every resource shared across nodes.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use winit::window::Window;

use crate::{
    camera::{Camera, CameraResources, Projection},
    config::AppConfig,
    data_structures::texture::{self, Texture, create_default_sampler},
    pipelines::{light::LightResources, scene::SceneResources},
    render::Render,
    resources::texture::{load_texture, mk_texture_bind_group},
};

/// Something that keeps GPU buffers in sync with its state and knows how to
/// describe itself to the renderer.
pub trait GPUResource<'a> {
    fn write_to_buffer(&mut self, ctx: &Context);

    fn get_render(&'a self) -> Render<'a>;
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub scene: SceneResources,
    pub clear_colour: wgpu::Color,
    pub assets_dir: PathBuf,
    sampler: wgpu::Sampler,
    white: wgpu::BindGroup,
    textures: HashMap<String, wgpu::BindGroup>,
}

impl Context {
    /// Set up the GPU for `window`.
    ///
    /// Fails when no adapter or device is available; there is nothing to fall
    /// back to in that case.
    pub async fn new(window: Arc<Window>, app: &AppConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("could not create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no graphics adapter available")?;
        log::info!("device and queue on {:?}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("polyscene device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("could not open a graphics device")?;

        log::info!("Surface");
        let surface_caps = surface.get_capabilities(&adapter);
        // The shader writes linear colors, so prefer an sRGB surface.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no supported formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let camera = Camera::new(app.camera_eye, app.camera_target);
        let projection = Projection::new(
            config.width,
            config.height,
            cgmath::Deg(app.fovy),
            0.1,
            100.0,
        );
        let camera = CameraResources::new(&device, camera, &projection);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let light = LightResources::new(&device);
        let scene = SceneResources::new(
            &device,
            &config,
            &camera.bind_group_layout,
            &light.bind_group_layout,
        );

        let sampler = create_default_sampler(&device);
        let white = mk_texture_bind_group(
            &device,
            &scene.texture_bind_group_layout,
            &Texture::create_solid([255, 255, 255, 255], "white", &device, &queue),
            &sampler,
            "white_texture_bind_group",
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            scene,
            window,
            depth_texture,
            clear_colour: app.clear_colour,
            assets_dir: app.assets_dir.clone(),
            sampler,
            white,
            textures: HashMap::new(),
        })
    }

    /// Bind group for the image at `path`, loaded once and cached.
    ///
    /// An image that cannot be loaded is reported and replaced with white so
    /// the node still renders.
    pub fn texture_bind_group(&mut self, path: &str) -> wgpu::BindGroup {
        if let Some(group) = self.textures.get(path) {
            return group.clone();
        }
        let group = match load_texture(&self.assets_dir, path, &self.device, &self.queue) {
            Ok(texture) => mk_texture_bind_group(
                &self.device,
                &self.scene.texture_bind_group_layout,
                &texture,
                &self.sampler,
                path,
            ),
            Err(e) => {
                log::warn!("texture {path} could not be loaded, falling back to white: {e:#}");
                self.white.clone()
            }
        };
        self.textures.insert(path.to_string(), group.clone());
        group
    }

    /// Bind group of the 1x1 white texture.
    pub fn white_texture(&self) -> &wgpu::BindGroup {
        &self.white
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.projection.resize(width, height);
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = Texture::create_depth_texture(&self.device, [width, height], "depth_texture");
        self.camera.write(&self.queue, &self.projection);
    }
}
