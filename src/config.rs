//! Application configuration.
//!
//! Scenes are built in code; this only covers the window, camera and where
//! image assets are read from.

use std::path::PathBuf;

/// Environment variable overriding [`AppConfig::assets_dir`].
pub const ASSETS_ENV: &str = "POLYSCENE_ASSETS";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    pub camera_eye: [f32; 3],
    pub camera_target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "polyscene".to_string(),
            width: 1024,
            height: 768,
            clear_colour: wgpu::Color {
                r: 0.05,
                g: 0.05,
                b: 0.08,
                a: 1.0,
            },
            camera_eye: [0.0, 0.0, 5.0],
            camera_target: [0.0, 0.0, 0.0],
            fovy: 45.0,
            assets_dir: PathBuf::from("./assets"),
        }
    }
}

impl AppConfig {
    /// Defaults, with the assets directory taken from `POLYSCENE_ASSETS` when set.
    pub fn from_env() -> Self {
        Self::default().with_assets_override(std::env::var(ASSETS_ENV).ok())
    }

    pub fn with_assets_override(mut self, dir: Option<String>) -> Self {
        match dir {
            Some(dir) if !dir.trim().is_empty() => {
                log::info!("reading assets from {dir}");
                self.assets_dir = PathBuf::from(dir);
            }
            Some(_) => log::warn!("{ASSETS_ENV} is set but empty, keeping {:?}", self.assets_dir),
            None => (),
        }
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_camera(mut self, eye: [f32; 3], target: [f32; 3]) -> Self {
        self.camera_eye = eye;
        self.camera_target = target;
        self
    }
}
