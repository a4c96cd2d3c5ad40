//! Application event loop.
//!
//! Owns the window, the GPU [`Context`] and one [`Scene`]. Each frame follows
//! the same fixed order on the render thread:
//!
//! 1. `Scene::animation_update` advances angles, positions and lights
//! 2. world transforms are recomputed from the root down
//! 3. node uniforms and the light table are written to their buffers
//! 4. the scene's draw calls are issued through the scene pipeline
//! 5. the frame is presented

use std::sync::Arc;

use cgmath::SquareMatrix;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    config::AppConfig,
    context::{Context, GPUResource},
    scenes::Scene,
};

/// Window, context and scene, created once the event loop resumes.
struct AppState {
    ctx: Context,
    is_surface_configured: bool,
}

impl AppState {
    fn new(window: Arc<Window>, config: &AppConfig, scene: &mut dyn Scene) -> anyhow::Result<Self> {
        let mut ctx = futures::executor::block_on(Context::new(window, config))?;
        scene.initialize(&mut ctx.light.slots)?;
        scene.root_mut().update_world_transforms(&cgmath::Matrix4::identity());
        scene.root_mut().init_gpu_resources(&mut ctx);
        ctx.light.write(&ctx.queue);
        log::info!(
            "scene {} ready with {} meshes and {} lights",
            scene.name(),
            scene.root().draw_order().len(),
            ctx.light.slots.active_count()
        );
        Ok(Self {
            ctx,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.resize(width, height);
            self.is_surface_configured = true;
        }
    }

    fn update(&mut self, scene: &mut dyn Scene) -> anyhow::Result<()> {
        scene.animation_update(&mut self.ctx.light.slots)?;
        let root = scene.root_mut();
        root.update_world_transforms(&cgmath::Matrix4::identity());
        root.write_to_buffer(&self.ctx);
        self.ctx.light.write(&self.ctx.queue);
        Ok(())
    }

    fn render(&mut self, scene: &dyn Scene) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.ctx.scene.pipeline);
            render_pass.set_bind_group(0, &self.ctx.camera.bind_group, &[]);
            GPUResource::get_render(scene.root()).draw(
                &mut render_pass,
                &self.ctx.light,
                self.ctx.white_texture(),
            );
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

struct App {
    config: AppConfig,
    scene: Box<dyn Scene>,
    state: Option<AppState>,
    error: Option<anyhow::Error>,
    frames: u64,
    last_report: Instant,
}

impl App {
    fn new(config: AppConfig, scene: Box<dyn Scene>) -> Self {
        Self {
            config,
            scene,
            state: None,
            error: None,
            frames: 0,
            last_report: Instant::now(),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match AppState::new(window, &self.config, self.scene.as_mut()) {
            Ok(state) => {
                state.ctx.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e.context("startup failed")),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                if let Err(e) = state.update(self.scene.as_mut()) {
                    return self.fail(event_loop, e);
                }
                match state.render(self.scene.as_ref()) {
                    Ok(_) => {
                        self.frames += 1;
                        let elapsed = self.last_report.elapsed();
                        if elapsed.as_secs() >= 5 {
                            log::debug!(
                                "{:.1} fps",
                                self.frames as f64 / elapsed.as_secs_f64()
                            );
                            self.frames = 0;
                            self.last_report = Instant::now();
                        }
                    }
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        log::warn!("Surface timeout");
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Open a window and animate `scene` until the window is closed.
///
/// Fails when the window or the GPU cannot be set up.
pub fn run(config: AppConfig, scene: Box<dyn Scene>) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
