//! Animation clock

/// Monotonically increasing elapsed time, advanced by frame deltas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    elapsed: f32,
    last_delta: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `delta` seconds
    ///
    /// Negative or non-finite deltas advance by zero so the clock never runs
    /// backwards. Returns the delta actually applied.
    pub fn tick(&mut self, delta: f32) -> f32 {
        let delta = if delta.is_finite() && delta > 0.0 { delta } else { 0.0 };
        self.elapsed += delta;
        self.last_delta = delta;
        delta
    }

    /// Total elapsed seconds
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Delta applied by the most recent tick
    #[inline]
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
}
