//! State-variable bandpass filter — the per-band primitive of the filterbank.

/// A two-pole state-variable filter reduced to its bandpass output.
///
/// The filter keeps two running accumulators (lowpass and bandpass state)
/// and takes its coefficients per call: `f` is the frequency coefficient
/// `2*sin(pi*fc/sr)` and `q` is the reciprocal of the resonance Q. The
/// coefficients live in the published snapshot rather than in the filter,
/// so one instance serves exactly one band of one channel of one signal
/// path and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandpassFilter {
    low: f32,
    band: f32,
}

impl BandpassFilter {
    pub const fn new() -> Self {
        Self { low: 0.0, band: 0.0 }
    }

    /// Advance the filter by one sample and return the bandpass output.
    #[inline]
    pub fn process(&mut self, input: f32, f: f32, q: f32) -> f32 {
        self.low += f * self.band;
        let high = input - self.low - q * self.band;
        self.band += f * high;
        self.band
    }

    /// Zero both accumulators.
    pub fn reset(&mut self) {
        self.low = 0.0;
        self.band = 0.0;
    }
}
