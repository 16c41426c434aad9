//! Particle intro sequencer
//!
//! This crate owns the animated intro that plays before the site content:
//!
//! - [`IntroConfig`] - Tunable timing and motion constants
//! - [`Particle`] / [`ParticleField`] - Randomized particles generated once per run
//! - [`Color`] / [`PALETTE`] - The fixed particle palette
//! - [`particle_transform`] - Pure `(particle, elapsed) -> transform` function
//! - [`InstanceBuffer`] - Preallocated per-particle transform array for the GPU
//! - [`IntroSequencer`] - Frame-driven state machine with a one-shot completion latch
//! - [`IntroHandoff`] - Parent view: deactivates the sequencer, fades out, then unmounts

mod config;
mod palette;
mod particle;
mod motion;
mod instance;
mod clock;
mod sequencer;
mod transition;
mod handoff;

pub use config::{IntroConfig, IntroError};
pub use palette::{Color, PALETTE};
pub use particle::{Particle, ParticleField};
pub use motion::{
    Phase, ParticleTransform, particle_transform, motion_phase,
    pulse_amplitude, pulse_frequency, explode_distance,
};
pub use instance::{InstanceData, InstanceBuffer};
pub use clock::AnimationClock;
pub use sequencer::IntroSequencer;
pub use transition::FadeTransition;
pub use handoff::{IntroHandoff, HandoffState};

// Re-export math types used in the public API
pub use haze_math::{Vec3, Euler, Mat4};
