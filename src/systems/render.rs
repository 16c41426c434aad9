//! GPU rendering system
//!
//! Owns the render context and the intro pipeline, and draws one intro
//! frame at a time.

use std::sync::Arc;
use winit::window::Window;
use haze_render::{IntroPipeline, RenderContext, RenderError};

use crate::systems::IntroSystem;

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: IntroPipeline,
}

impl RenderSystem {
    /// Create render system for a window, sized for `max_instances` particles
    pub fn new(window: Arc<Window>, vsync: bool, max_instances: usize) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut pipeline = IntroPipeline::new(&context.device, context.config.format, max_instances);

        // Ensure depth texture exists
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        Ok(Self { context, pipeline })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Render a single intro frame
    pub fn render_intro(&mut self, intro: &IntroSystem) -> Result<(), RenderError> {
        let uniforms = intro.uniforms(self.context.aspect_ratio());
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
        self.pipeline.upload_instances(&self.context.queue, intro.instances());

        self.present(intro.clear_color())
    }

    /// Clear the window once the intro is unmounted
    pub fn render_blank(&mut self, background: [f32; 4]) -> Result<(), RenderError> {
        self.pipeline.upload_instances(&self.context.queue, &[]);
        self.present(background)
    }

    fn present(&mut self, clear: [f32; 4]) -> Result<(), RenderError> {
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Intro Encoder"),
            });

        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: clear[0] as f64,
                g: clear[1] as f64,
                b: clear[2] as f64,
                a: clear[3] as f64,
            },
        );

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover(&mut self) {
        self.context.reconfigure();
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
