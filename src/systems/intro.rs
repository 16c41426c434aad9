//! Intro system
//!
//! Drives the intro handoff and the orbiting camera once per frame and
//! assembles the uniforms the intro pipeline draws with.

use haze_intro::{HandoffState, InstanceData, IntroConfig, IntroError, IntroHandoff, Vec3};
use haze_render::{IntroUniforms, OrbitCamera};

use crate::config::{CameraConfig, RenderingConfig};

/// Longest frame the intro will step; longer stalls are clamped
const MAX_FRAME_DELTA: f32 = 0.25;

/// The mounted intro: animation, camera and lighting constants
pub struct IntroSystem {
    handoff: IntroHandoff,
    camera: OrbitCamera,
    rendering: RenderingConfig,
}

impl IntroSystem {
    /// Mount a new intro run
    pub fn new(
        intro: &IntroConfig,
        camera: &CameraConfig,
        rendering: &RenderingConfig,
    ) -> Result<Self, IntroError> {
        let handoff = IntroHandoff::new(intro.clone())?;
        let [x, y, z] = camera.position;
        let camera = OrbitCamera::new(Vec3::new(x, y, z), camera.fov, camera.near, camera.far)
            .with_auto_rotate(camera.auto_rotate_speed);

        log::info!(
            "Intro mounted with {} particles ({}s)",
            intro.particle_count,
            intro.total_duration
        );

        Ok(Self {
            handoff,
            camera,
            rendering: rendering.clone(),
        })
    }

    /// Advance one frame of `dt` seconds
    pub fn update(&mut self, dt: f32) -> HandoffState {
        let dt = if dt.is_finite() { dt.min(MAX_FRAME_DELTA) } else { 0.0 };
        self.camera.update(dt);
        let state = self.handoff.frame(dt);
        log::trace!(
            "Intro frame {} at {:.3}s ({:?})",
            self.handoff.sequencer().frame_count(),
            self.handoff.sequencer().elapsed(),
            state
        );
        state
    }

    /// Uniforms for the current frame at `aspect`
    pub fn uniforms(&self, aspect: f32) -> IntroUniforms {
        IntroUniforms {
            view_matrix: self.camera.view_matrix(),
            projection_matrix: self.camera.projection_matrix(aspect),
            eye: self.camera.eye().to_array(),
            ambient_strength: self.rendering.ambient_strength,
            emissive: self.rendering.emissive_color,
            emissive_strength: self.rendering.emissive_strength,
            fade: self.handoff.overlay_alpha(),
            _padding: [0.0; 3],
        }
    }

    /// This frame's per-particle instance records
    pub fn instances(&self) -> &[InstanceData] {
        self.handoff.sequencer().instances().as_slice()
    }

    /// Clear color, faded with the intro
    pub fn clear_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.rendering.background_color;
        let alpha = self.handoff.overlay_alpha();
        [r * alpha, g * alpha, b * alpha, a]
    }

    pub fn state(&self) -> HandoffState {
        self.handoff.state()
    }

    /// True once the intro should be unmounted
    pub fn is_done(&self) -> bool {
        self.handoff.is_done()
    }

    pub fn handoff(&self) -> &IntroHandoff {
        &self.handoff
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
}
