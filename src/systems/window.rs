//! The site window
//!
//! Hosts the intro and receives the keys that drive the pages. The title
//! tracks the page currently printed to the terminal.

use std::sync::Arc;

use winit::{
    dpi::LogicalSize,
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};

use crate::config::WindowConfig;

/// Smallest window the intro is laid out for
const MIN_SIZE: LogicalSize<u32> = LogicalSize::new(320, 240);

/// Windowed or borderless fullscreen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Windowed,
    Fullscreen,
}

impl WindowMode {
    fn from_config(config: &WindowConfig) -> Self {
        if config.fullscreen {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            WindowMode::Windowed => WindowMode::Fullscreen,
            WindowMode::Fullscreen => WindowMode::Windowed,
        }
    }

    fn fullscreen(self) -> Option<Fullscreen> {
        match self {
            WindowMode::Windowed => None,
            WindowMode::Fullscreen => Some(Fullscreen::Borderless(None)),
        }
    }
}

/// Attributes for the site window; sizes below [`MIN_SIZE`] are raised to it
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let size = LogicalSize::new(
        config.width.max(MIN_SIZE.width),
        config.height.max(MIN_SIZE.height),
    );
    Window::default_attributes()
        .with_title(format_title(&config.title, ""))
        .with_inner_size(size)
        .with_min_inner_size(MIN_SIZE)
        .with_fullscreen(WindowMode::from_config(config).fullscreen())
}

/// The window plus what it currently shows in its title
pub struct WindowSystem {
    window: Arc<Window>,
    site_title: String,
    status: String,
    mode: WindowMode,
}

impl WindowSystem {
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(window_attributes(config))
            .map_err(WindowError::Os)?;
        log::info!("Opened {}x{} window", config.width, config.height);

        Ok(Self {
            window: Arc::new(window),
            site_title: config.title.clone(),
            status: String::new(),
            mode: WindowMode::from_config(config),
        })
    }

    /// Shared handle for the renderer's surface
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn toggle_fullscreen(&mut self) {
        self.mode = self.mode.toggled();
        log::debug!("Window mode {:?}", self.mode);
        self.window.set_fullscreen(self.mode.fullscreen());
    }

    /// Show `status` after the site title; unchanged titles are not re-sent
    pub fn update_title(&mut self, status: &str) {
        if self.status == status {
            return;
        }
        self.status = status.to_string();
        self.window.set_title(&format_title(&self.site_title, status));
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// `site - status`, or just `site` when there is no status
pub fn format_title(site: &str, status: &str) -> String {
    if status.is_empty() {
        site.to_string()
    } else {
        format!("{} - {}", site, status)
    }
}

/// Error type for window setup
#[derive(Debug)]
pub enum WindowError {
    /// The platform refused to open the window
    Os(OsError),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::Os(err) => write!(f, "Could not open the site window: {}", err),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Os(err) => Some(err),
        }
    }
}

impl From<OsError> for WindowError {
    fn from(err: OsError) -> Self {
        WindowError::Os(err)
    }
}
