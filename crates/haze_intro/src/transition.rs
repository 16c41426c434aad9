//! Fade transition
//!
//! Tracks progress of a fixed-length fade and provides the overlay alpha for
//! rendering. Progress is driven by frame deltas rather than wall-clock reads
//! so it stays in lockstep with the animation clock.

use std::time::Duration;

/// Fade-out progress from fully visible to fully hidden
#[derive(Clone, Debug)]
pub struct FadeTransition {
    /// Total length of the fade
    duration: Duration,
    /// Seconds elapsed since the fade started
    elapsed: f32,
    /// Current progress from 0.0 (start) to 1.0 (complete)
    progress: f32,
}

impl FadeTransition {
    /// Create a fade that starts now
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            progress: 0.0,
        }
    }

    /// Advance by `delta` seconds
    ///
    /// Returns true when the fade is complete. A zero-length fade completes
    /// on the first update.
    pub fn update(&mut self, delta: f32) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }

        let duration = self.duration.as_secs_f32();
        if duration <= 0.0 {
            self.progress = 1.0;
            return true;
        }

        self.progress = (self.elapsed / duration).min(1.0);
        self.progress >= 1.0
    }

    /// Get current progress (0.0 = start, 1.0 = complete)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Get the configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Opacity of the fading content: 1.0 -> 0.0
    pub fn alpha(&self) -> f32 {
        1.0 - self.progress
    }

    /// Check if the fade is complete
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut fade = FadeTransition::new(Duration::ZERO);
        assert!(fade.update(0.0));
        assert!(fade.is_complete());
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_alpha_at_start() {
        let fade = FadeTransition::new(Duration::from_millis(500));
        assert_eq!(fade.progress(), 0.0);
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn test_alpha_progression() {
        let mut fade = FadeTransition::new(Duration::from_millis(500));

        fade.update(0.125);
        assert!((fade.alpha() - 0.75).abs() < 0.001);

        fade.update(0.125);
        assert!((fade.alpha() - 0.5).abs() < 0.001);

        assert!(!fade.is_complete());
        assert!(fade.update(0.3));
        assert_eq!(fade.progress(), 1.0);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut fade = FadeTransition::new(Duration::from_secs(1));
        fade.update(-1.0);
        fade.update(f32::NAN);
        assert_eq!(fade.progress(), 0.0);
        assert_eq!(fade.duration(), Duration::from_secs(1));
    }
}
