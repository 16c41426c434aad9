//! Per-frame particle motion
//!
//! Motion is a pure function of a particle and the elapsed time. The gather
//! phase pulls particles toward the origin while pulsing; the explode phase
//! pushes them outward along their fixed direction with a quadratic ease-in.

use std::f32::consts::TAU;

use haze_math::{easing, mat4, Euler, Mat4, Vec3};

use crate::config::IntroConfig;
use crate::particle::Particle;

/// Intro state machine phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Particles generated, no frame rendered yet
    Init,
    /// Converging toward the origin with a building pulse
    Gather,
    /// Accelerating outward
    Explode,
    /// Completion signal raised; waiting for the caller to deactivate
    Complete,
    /// Deactivated after completion; still rendering until unmounted
    Terminal,
}

/// Position, rotation and uniform scale of one particle at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleTransform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: f32,
}

impl ParticleTransform {
    /// Model matrix (`T * R * S`)
    pub fn to_matrix(&self) -> Mat4 {
        mat4::compose(self.position, self.rotation, self.scale)
    }
}

/// Motion phase for an elapsed time (only `Gather` or `Explode`)
#[inline]
pub fn motion_phase(elapsed: f32, config: &IntroConfig) -> Phase {
    if elapsed < config.gather_threshold {
        Phase::Gather
    } else {
        Phase::Explode
    }
}

/// Pulse amplitude at gather progress `p`; strictly increasing on `[0, 1]`
#[inline]
pub fn pulse_amplitude(p: f32, config: &IntroConfig) -> f32 {
    let p = p.clamp(0.0, 1.0);
    config.pulse_max_amplitude * p * p
}

/// Pulse frequency (Hz) at gather progress `p`; rises to 4x the base rate
#[inline]
pub fn pulse_frequency(p: f32, config: &IntroConfig) -> f32 {
    config.pulse_base_frequency * (1.0 + 3.0 * p.clamp(0.0, 1.0))
}

/// Distance travelled from the origin during the explode phase
#[inline]
pub fn explode_distance(speed: f32, elapsed: f32, config: &IntroConfig) -> f32 {
    let t = (elapsed - config.gather_threshold).max(0.0);
    speed * t * t * config.explode_scale
}

/// Compute a particle's transform at `elapsed` seconds
pub fn particle_transform(particle: &Particle, elapsed: f32, config: &IntroConfig) -> ParticleTransform {
    let g = config.gather_threshold;

    if elapsed < g {
        let p = (elapsed / g).max(0.0);
        let ease = easing::ease_out_cubic(p);

        let pulse = 1.0 + pulse_amplitude(p, config)
            * (TAU * pulse_frequency(p, config) * elapsed).sin();

        ParticleTransform {
            position: particle.initial_position * (1.0 - ease),
            rotation: Euler::uniform(elapsed * config.gather_spin),
            scale: particle.size * (0.5 + ease * 0.5) * pulse,
        }
    } else {
        let explode_time = elapsed - g;

        // Integral of rotation_speed * rotation_rate * frame_delta since the
        // phase began, starting from where the gather spin left off.
        let spin = g * config.gather_spin
            + particle.rotation_speed * config.rotation_rate * explode_time;

        let shimmer = 1.0
            + (explode_time * config.shimmer_frequency).sin() * config.shimmer_amplitude;

        ParticleTransform {
            position: particle.direction * explode_distance(particle.speed, elapsed, config),
            rotation: Euler::uniform(spin),
            scale: particle.size * shimmer,
        }
    }
}
