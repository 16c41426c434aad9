//! Intro timing and motion constants

use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Tunable constants for the intro animation
///
/// Defaults give the stock timing: 400 particles, a 0.3s gather
/// phase and completion after 3.5s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Number of particles generated per run
    pub particle_count: usize,
    /// End of the gather phase in seconds
    pub gather_threshold: f32,
    /// Elapsed time after which the completion signal fires
    pub total_duration: f32,
    /// Multiplier on the quadratic explosion distance (lower = slower)
    pub explode_scale: f32,
    /// Multiplier on `rotation_speed * frame_delta` during the explosion
    pub rotation_rate: f32,
    /// Angular velocity on each axis during the gather phase (rad/s)
    pub gather_spin: f32,
    /// Width of the random perturbation added to each explosion direction
    pub direction_jitter: f32,
    /// Shimmer frequency during the explosion (rad/s)
    pub shimmer_frequency: f32,
    /// Shimmer amplitude as a fraction of particle size
    pub shimmer_amplitude: f32,
    /// Pulse amplitude reached at the end of the gather phase
    pub pulse_max_amplitude: f32,
    /// Pulse frequency at the start of the gather phase (Hz)
    pub pulse_base_frequency: f32,
    /// Buffer between completion and unmount, used for the fade-out
    pub handoff_delay_ms: u64,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Skip the intro entirely
    pub skip: bool,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            particle_count: 400,
            gather_threshold: 0.3,
            total_duration: 3.5,
            explode_scale: 3.0,
            rotation_rate: 20.0,
            gather_spin: 2.0,
            direction_jitter: 0.5,
            shimmer_frequency: 10.0,
            shimmer_amplitude: 0.2,
            pulse_max_amplitude: 0.25,
            pulse_base_frequency: 6.0,
            handoff_delay_ms: 500,
            seed: None,
            skip: false,
        }
    }
}

impl IntroConfig {
    /// Fade-out buffer as a duration
    pub fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms)
    }

    /// Check the constants describe a playable animation
    pub fn validate(&self) -> Result<(), IntroError> {
        if self.particle_count == 0 {
            return Err(IntroError::NoParticles);
        }
        if !(self.gather_threshold.is_finite() && self.gather_threshold > 0.0) {
            return Err(IntroError::InvalidGatherThreshold(self.gather_threshold));
        }
        if !(self.total_duration.is_finite() && self.total_duration > self.gather_threshold) {
            return Err(IntroError::InvalidDuration {
                gather: self.gather_threshold,
                total: self.total_duration,
            });
        }
        Ok(())
    }
}

/// Invalid intro configuration
#[derive(Debug, Clone, PartialEq)]
pub enum IntroError {
    /// `particle_count` was zero
    NoParticles,
    /// Gather threshold must be positive and finite
    InvalidGatherThreshold(f32),
    /// Total duration must be finite and past the gather threshold
    InvalidDuration { gather: f32, total: f32 },
}

impl std::fmt::Display for IntroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntroError::NoParticles => write!(f, "Intro needs at least one particle"),
            IntroError::InvalidGatherThreshold(g) => {
                write!(f, "Invalid gather threshold: {}", g)
            }
            IntroError::InvalidDuration { gather, total } => write!(
                f,
                "Total duration {} must exceed gather threshold {}",
                total, gather
            ),
        }
    }
}

impl std::error::Error for IntroError {}
