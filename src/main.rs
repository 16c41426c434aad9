//! Haze's site
//!
//! Plays the particle intro in a window, then shows the site's pages in the
//! terminal. Keys pressed in the window drive navigation and the player.

use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use haze_content::{ContentLoader, DirSource, DocumentSource};
use haze_player::{MediaElement, NullMedia};
use haze_render::RenderError;

use hazesite::config::{AppConfig, SiteConfig};
use hazesite::error_policy::ErrorPolicy;
use hazesite::input::{InputMapper, SiteAction};
use hazesite::pages::TextRenderer;
use hazesite::router::Router;
use hazesite::site::Site;
use hazesite::systems::{IntroSystem, RenderSystem, WindowSystem};

/// How often loads and playback are polled once the intro is gone
const IDLE_TICK: Duration = Duration::from_millis(100);

const KEY_HELP: &str =
    "[1-4] navigate  [R] refresh  [Space] play/pause  [N/P] next/prev  [Up/Down] volume  \
     [Left/Right] seek  [C] close player  [F5] reload  [F] fullscreen  [Esc] exit";

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    intro: Option<IntroSystem>,
    site: Site,
    media: Box<dyn MediaElement>,
    text: TextRenderer,
    start_path: String,
    site_shown: bool,
    last_frame: Instant,
    last_printed: String,
}

impl App {
    fn new(config: AppConfig, start_route: Option<String>) -> Self {
        let router = Router::new(config.site.basename());
        let loader = ContentLoader::with_shared(
            document_source(&config.site),
            config.site.normalized_base_path(),
        );
        let site = Site::new(loader, router).with_player_config(config.player.clone());

        let start_route = start_route.unwrap_or_else(|| config.site.start_route.clone());
        let start_path = site.router().join(&start_route);
        let media = media_element(&config.site);

        Self {
            config,
            window: None,
            render: None,
            intro: None,
            site,
            media,
            text: TextRenderer::new(),
            start_path,
            site_shown: false,
            last_frame: Instant::now(),
            last_printed: String::new(),
        }
    }

    /// Mount the intro and its renderer; on failure go straight to the site
    fn mount_intro(&mut self) {
        if self.config.intro.skip {
            log::info!("Intro skipped");
            self.show_site();
            return;
        }

        let intro = match IntroSystem::new(
            &self.config.intro,
            &self.config.camera,
            &self.config.rendering,
        ) {
            Ok(intro) => intro,
            Err(e) => {
                log::error!("Invalid intro config: {}", e);
                self.show_site();
                return;
            }
        };

        if let Some(window) = &self.window {
            match RenderSystem::new(
                window.window().clone(),
                self.config.window.vsync,
                self.config.intro.particle_count,
            ) {
                Ok(render) => self.render = Some(render),
                Err(e) => {
                    log::error!("Renderer unavailable, skipping intro: {}", e);
                    self.show_site();
                    return;
                }
            }
        }

        self.intro = Some(intro);
        self.last_frame = Instant::now();
    }

    /// Unmount the intro and mount the main content
    fn show_site(&mut self) {
        self.intro = None;
        if self.site_shown {
            return;
        }
        self.site_shown = true;
        let path = self.start_path.clone();
        self.site.navigate(&path);
        self.refresh_screen();
    }

    /// Reprint the page if anything on it changed
    fn refresh_screen(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.update_title(self.site.route().label());
        }

        let page = self.site.page();
        let text = self.text.render(&page);
        if text == self.last_printed {
            return;
        }

        let mut stdout = std::io::stdout().lock();
        // Clear the terminal and home the cursor
        let written = write!(stdout, "\x1b[2J\x1b[H{}\n{}\n", text, KEY_HELP)
            .and_then(|_| stdout.flush());
        if let Err(e) = written {
            log::warn!("Failed to draw page: {}", e);
        }
        self.last_printed = text;
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: SiteAction) {
        match action {
            SiteAction::Exit => event_loop.exit(),
            SiteAction::ToggleFullscreen => {
                if let Some(window) = self.window.as_mut() {
                    window.toggle_fullscreen();
                }
            }
            action if self.site_shown => {
                self.site.perform(action);
                self.site.sync_media(self.media.as_mut());
                self.refresh_screen();
            }
            action => log::debug!("Ignoring {:?} during the intro", action),
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let Some(intro) = self.intro.as_mut() else {
            return;
        };
        intro.update(dt);
        let done = intro.is_done();

        if let Some(render) = self.render.as_mut() {
            let result = if done {
                render.render_blank(self.config.rendering.background_color)
            } else {
                render.render_intro(intro)
            };
            match result {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("Surface error: {}", e),
            }
        }

        if done {
            self.show_site();
        } else if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.mount_intro();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) =
                        InputMapper::map_keyboard(key, event.state, self.config.player.volume_step)
                    {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.site_shown {
            event_loop.set_control_flow(ControlFlow::Poll);
            return;
        }

        self.site.poll();
        self.site.sync_media(self.media.as_mut());
        self.refresh_screen();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + IDLE_TICK));
    }
}

/// Static directory by default; HTTP when built with `network` and an origin is set
fn document_source(site: &SiteConfig) -> Arc<dyn DocumentSource> {
    if let Some(source) = http_source(site) {
        return source;
    }
    log::info!("Serving documents from {}", site.content_root.display());
    Arc::new(DirSource::new(site.content_root.clone()))
}

#[cfg(feature = "network")]
fn http_source(site: &SiteConfig) -> Option<Arc<dyn DocumentSource>> {
    if site.origin.is_empty() {
        return None;
    }
    match haze_content::HttpSource::new(site.origin.clone()) {
        Ok(source) => {
            log::info!("Fetching documents from {}", site.origin);
            Some(Arc::new(source))
        }
        Err(e) => {
            log::warn!("HTTP client unavailable ({}), using {}", e, site.content_root.display());
            None
        }
    }
}

#[cfg(not(feature = "network"))]
fn http_source(site: &SiteConfig) -> Option<Arc<dyn DocumentSource>> {
    if !site.origin.is_empty() {
        log::warn!("site.origin is set but this build has no `network` feature");
    }
    None
}

#[cfg(feature = "audio")]
fn media_element(site: &SiteConfig) -> Box<dyn MediaElement> {
    match haze_player::RodioMedia::new(site.content_root.clone()) {
        Ok(media) => Box::new(media),
        Err(e) => {
            log::warn!("No audio output ({}), the player will be silent", e);
            Box::new(NullMedia::new())
        }
    }
}

#[cfg(not(feature = "audio"))]
fn media_element(_site: &SiteConfig) -> Box<dyn MediaElement> {
    Box::new(NullMedia::new())
}

fn main() -> Result<(), Box<dyn Error>> {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    ErrorPolicy::install();
    log::info!("Starting Haze's site");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let start_route = std::env::args().nth(1);

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config, start_route);
    event_loop.run_app(&mut app)?;
    Ok(())
}
