//! Integration tests for the intro sequence
//!
//! These tests drive the sequencer the way the render loop does:
//! 1. Particles are generated within their documented ranges
//! 2. Completion fires exactly once when the run stays active
//! 3. Deactivating early suppresses completion
//! 4. The handoff fades out and unmounts after completion

use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;

use haze_intro::{
    explode_distance, pulse_amplitude, HandoffState, IntroConfig, IntroHandoff,
    IntroSequencer, Phase,
};

const FRAME: f32 = 1.0 / 60.0;

fn seeded(seed: u64) -> IntroConfig {
    IntroConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

fn counted(config: IntroConfig) -> (IntroSequencer, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0u32));
    let counter = calls.clone();
    let sequencer = IntroSequencer::new(config)
        .expect("default config should be valid")
        .with_on_complete(move || counter.set(counter.get() + 1));
    (sequencer, calls)
}

// ==================== Generation Tests ====================

#[test]
fn test_all_particles_within_ranges() {
    for seed in [0, 1, 99, 12345] {
        let sequencer = IntroSequencer::new(seeded(seed)).unwrap();
        assert_eq!(sequencer.particles().len(), 400);
        for p in sequencer.particles().iter() {
            assert!(p.angle >= 0.0 && p.angle < TAU);
            assert!(p.radius >= 0.0 && p.radius < 0.5);
            assert!(p.size >= 0.3 && p.size < 1.0);
        }
    }
}

#[test]
fn test_unseeded_runs_differ() {
    let a = IntroSequencer::new(IntroConfig::default()).unwrap();
    let b = IntroSequencer::new(IntroConfig::default()).unwrap();
    assert_ne!(a.particles().as_slice(), b.particles().as_slice());
}

// ==================== Completion Tests ====================

#[test]
fn test_completion_fires_exactly_once_at_60fps() {
    let (mut sequencer, calls) = counted(seeded(1));

    let mut fired_at = None;
    for frame in 0..(60 * 8) {
        if sequencer.advance(FRAME) {
            fired_at = Some(frame);
        }
    }

    assert_eq!(calls.get(), 1);
    let frame = fired_at.expect("completion should fire");
    // 3.5s at 60fps
    assert!((209..=211).contains(&frame), "fired on frame {}", frame);
}

#[test]
fn test_completion_with_irregular_frames() {
    let (mut sequencer, calls) = counted(seeded(2));
    let deltas = [0.016, 0.5, 0.033, 0.0, 1.2, 0.016, 2.0, 0.016, 0.016];
    for delta in deltas.iter().cycle().take(50) {
        sequencer.advance(*delta);
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_deactivated_before_duration_never_fires() {
    let (mut sequencer, calls) = counted(seeded(3));
    while sequencer.elapsed() < 3.0 {
        sequencer.advance(FRAME);
    }
    sequencer.set_active(false);
    for _ in 0..600 {
        sequencer.advance(FRAME);
    }
    assert_eq!(calls.get(), 0);
    assert_eq!(sequencer.phase(), Phase::Explode);
}

#[test]
fn test_reactivating_after_fire_does_not_refire() {
    let (mut sequencer, calls) = counted(seeded(4));
    sequencer.advance(4.0);
    sequencer.set_active(false);
    sequencer.set_active(true);
    sequencer.advance(1.0);
    assert_eq!(calls.get(), 1);
}

// ==================== Motion Contract Tests ====================

#[test]
fn test_pulse_amplitude_monotonic_over_gather() {
    let config = IntroConfig::default();
    let samples: Vec<f32> = (0..300)
        .map(|i| pulse_amplitude(i as f32 / 300.0, &config))
        .collect();
    assert!(samples.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_explode_distance_non_decreasing_for_each_speed() {
    let config = IntroConfig::default();
    for speed in [0.3, 0.5, 0.9, 1.09] {
        let mut last = 0.0;
        let mut t = 0.0;
        while t < 5.0 {
            let d = explode_distance(speed, t, &config);
            assert!(d >= last);
            last = d;
            t += FRAME;
        }
    }
}

// ==================== Handoff Tests ====================

#[test]
fn test_handoff_full_lifecycle() {
    let mut handoff = IntroHandoff::new(seeded(5)).unwrap();
    let mut states = vec![handoff.state()];
    let mut frames = 0;

    while !handoff.is_done() && frames < 60 * 10 {
        let state = handoff.frame(FRAME);
        if states.last() != Some(&state) {
            states.push(state);
        }
        frames += 1;
    }

    assert_eq!(
        states,
        vec![HandoffState::Playing, HandoffState::FadingOut, HandoffState::Done]
    );
    // 3.5s of animation plus the 0.5s buffer
    let seconds = frames as f32 * FRAME;
    assert!((3.9..4.2).contains(&seconds), "took {}s", seconds);
    assert_eq!(handoff.sequencer().phase(), Phase::Terminal);
}
