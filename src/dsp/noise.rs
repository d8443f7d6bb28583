//! Noise source — linear-congruential white noise for unvoiced content.

/// Deterministic white-noise generator.
///
/// A 32-bit linear congruential generator stepped once per sample:
/// `seed = seed * 1664525 + 1013904223` with wrapping arithmetic. The seed
/// reinterpreted as a signed value over 2^31 gives output in [-1, 1). Same
/// seed, same sequence.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSource {
    seed: u32,
}

impl NoiseSource {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Advance the generator and return the next sample.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed as i32) as f32 / 2147483648.0
    }
}
