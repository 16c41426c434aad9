//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HAZE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use haze_content::{normalize_base_path, router_basename};
use haze_intro::IntroConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Intro animation constants
    #[serde(default)]
    pub intro: IntroConfig,
    /// Intro camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Site content and routing
    #[serde(default)]
    pub site: SiteConfig,
    /// Music player configuration
    #[serde(default)]
    pub player: PlayerConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HAZE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HAZE_SITE__BASE_PATH=/repo/ -> site.base_path = "/repo/"
        figment = figment.merge(Env::prefixed("HAZE_").split("__"));

        let config: AppConfig = figment.extract().map_err(ConfigError::from)?;
        config.intro.validate().map_err(|e| ConfigError {
            message: format!("intro: {}", e),
        })?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Haze's site...".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Intro camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub position: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Orbit speed around the origin (2.0 = one turn per 30s)
    pub auto_rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            auto_rotate_speed: 2.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Emissive glow color [r, g, b]
    pub emissive_color: [f32; 3],
    /// Emissive glow strength
    pub emissive_strength: f32,
    /// Ambient light strength
    pub ambient_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            emissive_color: [1.0, 0.0, 0.0],
            emissive_strength: 0.5,
            ambient_strength: 0.3,
        }
    }
}

/// Site content and routing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Deployment base path (e.g. `/` or `/repo/`)
    pub base_path: String,
    /// Directory holding the static documents and tracks
    pub content_root: PathBuf,
    /// HTTP origin to fetch documents from (`network` feature); empty = local
    pub origin: String,
    /// Route shown after the intro when none is given on the command line
    pub start_route: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            content_root: PathBuf::from("public"),
            origin: String::new(),
            start_route: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Base path with a leading and trailing slash (`/` when empty)
    pub fn normalized_base_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }

    /// Router basename: `/`, or the base path without its trailing slash
    pub fn basename(&self) -> String {
        router_basename(&self.base_path)
    }
}

/// Music player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume in [0, 1]
    pub volume: f32,
    /// Start playing once the song list loads
    pub autoplay: bool,
    /// Volume change per Up/Down key press
    pub volume_step: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            autoplay: false,
            volume_step: 0.1,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
