//! Intro sequencer state machine
//!
//! The sequencer is driven by the host render loop: each frame the caller
//! passes the frame delta to [`IntroSequencer::advance`], which moves the
//! clock, rewrites every instance transform and checks for completion.
//!
//! Completion fires at most once per run. The sequencer holds its own
//! already-fired latch, so the guarantee does not depend on the caller
//! clearing the `active` flag promptly. Clearing `active` before the total
//! duration elapses suppresses completion for the run.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::AnimationClock;
use crate::config::{IntroConfig, IntroError};
use crate::instance::InstanceBuffer;
use crate::motion::{motion_phase, particle_transform, Phase};
use crate::particle::ParticleField;

/// Zero-argument completion callback
pub type CompletionCallback = Box<dyn FnMut()>;

/// Frame-driven particle intro
pub struct IntroSequencer {
    config: IntroConfig,
    particles: ParticleField,
    instances: InstanceBuffer,
    clock: AnimationClock,
    frames: u64,
    active: bool,
    fired: bool,
    on_complete: Option<CompletionCallback>,
}

impl IntroSequencer {
    /// Generate particles and allocate the instance buffer
    ///
    /// Uses `config.seed` when set, entropy otherwise.
    pub fn new(config: IntroConfig) -> Result<Self, IntroError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Generate particles from a caller-supplied RNG
    pub fn with_rng(config: IntroConfig, rng: &mut StdRng) -> Result<Self, IntroError> {
        config.validate()?;

        let particles = ParticleField::generate(config.particle_count, &config, rng);
        let instances = InstanceBuffer::for_field(&particles);

        log::debug!(
            "Intro mounted with {} particles ({:.2}s gather, {:.2}s total)",
            particles.len(),
            config.gather_threshold,
            config.total_duration
        );

        let mut sequencer = Self {
            config,
            particles,
            instances,
            clock: AnimationClock::new(),
            frames: 0,
            active: true,
            fired: false,
            on_complete: None,
        };
        sequencer.write_instances();
        Ok(sequencer)
    }

    /// Set the completion callback
    pub fn with_on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Advance the clock by one frame and rewrite all transforms
    ///
    /// Returns true on the frame the completion signal fires.
    pub fn advance(&mut self, frame_delta: f32) -> bool {
        self.clock.tick(frame_delta);
        self.frames += 1;
        self.write_instances();

        if self.clock.elapsed() > self.config.total_duration && self.active && !self.fired {
            self.fired = true;
            log::info!("Intro complete after {:.2}s ({} frames)", self.clock.elapsed(), self.frames);
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
            return true;
        }

        false
    }

    fn write_instances(&mut self) {
        let elapsed = self.clock.elapsed();
        for (index, particle) in self.particles.iter().enumerate() {
            let transform = particle_transform(particle, elapsed, &self.config);
            self.instances.write(index, &transform);
        }
    }

    /// Set the active flag
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Check the active flag
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the completion signal has fired this run
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        if self.frames == 0 {
            Phase::Init
        } else if self.fired && self.active {
            Phase::Complete
        } else if self.fired {
            Phase::Terminal
        } else {
            motion_phase(self.clock.elapsed(), &self.config)
        }
    }

    /// Elapsed animation time in seconds
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Generated particles
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Instance transforms for the current frame
    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    /// Active configuration
    pub fn config(&self) -> &IntroConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config() -> IntroConfig {
        IntroConfig {
            particle_count: 32,
            seed: Some(17),
            ..Default::default()
        }
    }

    fn counting_sequencer() -> (IntroSequencer, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sequencer = IntroSequencer::new(config())
            .unwrap()
            .with_on_complete(move || counter.set(counter.get() + 1));
        (sequencer, calls)
    }

    #[test]
    fn test_starts_in_init() {
        let (sequencer, calls) = counting_sequencer();
        assert_eq!(sequencer.phase(), Phase::Init);
        assert_eq!(sequencer.instances().len(), 32);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_phase_progression() {
        let (mut sequencer, _) = counting_sequencer();
        sequencer.advance(0.1);
        assert_eq!(sequencer.phase(), Phase::Gather);
        sequencer.advance(0.3);
        assert_eq!(sequencer.phase(), Phase::Explode);
        sequencer.advance(3.2);
        assert_eq!(sequencer.phase(), Phase::Complete);
        sequencer.set_active(false);
        assert_eq!(sequencer.phase(), Phase::Terminal);
    }

    #[test]
    fn test_fires_once_even_if_active_never_cleared() {
        let (mut sequencer, calls) = counting_sequencer();
        for _ in 0..600 {
            sequencer.advance(1.0 / 60.0);
        }
        assert_eq!(calls.get(), 1);
        assert!(sequencer.has_fired());
    }

    #[test]
    fn test_does_not_fire_at_exact_duration() {
        let (mut sequencer, calls) = counting_sequencer();
        assert!(!sequencer.advance(3.5));
        assert_eq!(calls.get(), 0);
        assert!(sequencer.advance(0.01));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_inactive_never_fires() {
        let (mut sequencer, calls) = counting_sequencer();
        sequencer.advance(1.0);
        sequencer.set_active(false);
        for _ in 0..10 {
            sequencer.advance(1.0);
        }
        assert_eq!(calls.get(), 0);
        assert!(!sequencer.has_fired());
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let (mut sequencer, _) = counting_sequencer();
        sequencer.advance(1.0);
        sequencer.advance(-5.0);
        assert_eq!(sequencer.elapsed(), 1.0);
        assert_eq!(sequencer.frame_count(), 2);
    }

    #[test]
    fn test_instances_follow_pure_transform() {
        let (mut sequencer, _) = counting_sequencer();
        sequencer.advance(1.25);
        let particle = sequencer.particles().get(5).unwrap().clone();
        let expected = particle_transform(&particle, 1.25, sequencer.config()).to_matrix();
        assert_eq!(sequencer.instances().get(5).unwrap().model, expected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = IntroSequencer::new(IntroConfig { particle_count: 0, ..config() });
        assert!(matches!(result, Err(IntroError::NoParticles)));
    }

    #[test]
    fn test_without_callback_still_latches() {
        let mut sequencer = IntroSequencer::new(config()).unwrap();
        assert!(sequencer.advance(4.0));
        assert!(!sequencer.advance(1.0));
    }
}
