//! Envelope follower — asymmetric one-pole amplitude tracker.

/// Tracks the magnitude of a signal with separate attack and release rates.
///
/// The level moves toward the rectified input by the attack coefficient
/// while rising and by the release coefficient while falling; both are
/// per-sample one-pole coefficients from the published snapshot. One
/// instance serves one band of one modulator channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeFollower {
    level: f32,
}

impl EnvelopeFollower {
    pub const fn new() -> Self {
        Self { level: 0.0 }
    }

    /// Advance by one sample and return the smoothed level.
    #[inline]
    pub fn process(&mut self, input: f32, attack: f32, release: f32) -> f32 {
        let rectified = input.abs();
        let coeff = if rectified > self.level { attack } else { release };
        self.level += coeff * (rectified - self.level);
        self.level
    }

    /// The current smoothed level.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Zero the tracked level.
    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}
