//! Particle generation
//!
//! Particles are generated once when the intro mounts and are never mutated
//! afterwards; all motion is derived from these parameters and the clock.

use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

use haze_math::Vec3;

use crate::config::IntroConfig;
use crate::palette::{Color, PALETTE};

/// One randomized intro particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Explosion heading in `[0, 2π)`
    pub angle: f32,
    /// Initial distance from the origin in `[0, 0.5)`
    pub radius: f32,
    /// Explosion distance multiplier in `[0.3, 1.1)`
    pub speed: f32,
    /// Self-rotation rate in `[-0.05, 0.05)`
    pub rotation_speed: f32,
    /// Gather-phase starting offset, derived from angle and radius
    pub initial_position: Vec3,
    /// Unit explosion direction: `angle` plus a fixed random perturbation
    pub direction: Vec3,
    /// Palette entry
    pub color: Color,
    /// Base scale in `[0.3, 1.0)`
    pub size: f32,
}

impl Particle {
    /// Draw a particle's parameters from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &IntroConfig) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(0.0..0.5);
        let speed = rng.gen_range(0.3..1.1);
        let rotation_speed = rng.gen_range(-0.05..0.05);

        let initial_position = Vec3::new(
            angle.cos() * radius,
            angle.sin() * radius,
            (rng.gen::<f32>() - 0.5) * radius,
        );

        let jitter = config.direction_jitter;
        let direction = Vec3::new(
            angle.cos() + jitter_sample(rng, jitter),
            angle.sin() + jitter_sample(rng, jitter),
            jitter_sample(rng, jitter),
        )
        .normalized();

        let color = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);
        let size = rng.gen_range(0.3..1.0);

        Self {
            angle,
            radius,
            speed,
            rotation_speed,
            initial_position,
            direction,
            color,
            size,
        }
    }
}

/// Uniform sample in `[-width/2, width/2)`, zero when the width is not positive
fn jitter_sample<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    if width > 0.0 {
        (rng.gen::<f32>() - 0.5) * width
    } else {
        0.0
    }
}

/// The full set of particles for one animation run
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` independent particles
    pub fn generate<R: Rng + ?Sized>(count: usize, config: &IntroConfig, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, config)).collect();
        Self { particles }
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the field has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Get a particle by index
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Iterate over particles in index order
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Particles as a slice
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> ParticleField {
        let config = IntroConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::generate(config.particle_count, &config, &mut rng)
    }

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(field(1).len(), 400);
        assert!(!field(1).is_empty());
    }

    #[test]
    fn test_parameter_ranges() {
        for p in field(7).iter() {
            assert!((0.0..TAU).contains(&p.angle), "angle {}", p.angle);
            assert!((0.0..0.5).contains(&p.radius), "radius {}", p.radius);
            assert!((0.3..1.1).contains(&p.speed), "speed {}", p.speed);
            assert!((-0.05..0.05).contains(&p.rotation_speed), "rotation {}", p.rotation_speed);
            assert!((0.3..1.0).contains(&p.size), "size {}", p.size);
        }
    }

    #[test]
    fn test_initial_position_derived_from_angle_and_radius() {
        for p in field(3).iter() {
            assert!((p.initial_position.x - p.angle.cos() * p.radius).abs() < 1e-6);
            assert!((p.initial_position.y - p.angle.sin() * p.radius).abs() < 1e-6);
            assert!(p.initial_position.z.abs() <= p.radius * 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_direction_is_unit_length() {
        for p in field(11).iter() {
            assert!((p.direction.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_jitter_points_along_angle() {
        let config = IntroConfig { direction_jitter: 0.0, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(5);
        let p = Particle::random(&mut rng, &config);
        assert!((p.direction.x - p.angle.cos()).abs() < 1e-5);
        assert!((p.direction.y - p.angle.sin()).abs() < 1e-5);
        assert_eq!(p.direction.z, 0.0);
    }

    #[test]
    fn test_colors_come_from_palette() {
        for p in field(9).iter() {
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = field(42);
        let b = field(42);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(field(42).as_slice(), field(43).as_slice());
    }
}
