//! Derived filter and envelope coefficients, and the render snapshot.
//!
//! Everything here is a pure function of the parameter store. The control
//! path recomputes the table on every publish; the audio path only ever
//! reads it out of a published [`RenderSnapshot`].

use std::f32::consts::PI;

use crate::SAMPLE_RATE;
use crate::params::VocoderParams;

/// Largest supported band count. Coefficient and state arrays are sized to
/// this; only the first `bands` entries of a configuration are live.
pub const MAX_BANDS: usize = 32;

/// Per-band filter coefficients plus the shared envelope coefficients.
#[derive(Debug, Clone, Copy)]
pub struct CoeffTable {
    /// SVF frequency coefficient per band: `2*sin(pi*fc/sr)`, clamped to 1
    /// for stability.
    pub freq: [f32; MAX_BANDS],
    /// SVF reciprocal-Q per band; identical across one configuration.
    pub rq: [f32; MAX_BANDS],
    /// One-pole attack coefficient shared by all envelope followers.
    pub attack: f32,
    /// One-pole release coefficient shared by all envelope followers.
    pub release: f32,
}

/// Log-spaced center frequency in Hz for `band` out of `count` between the
/// `low` and `high` bounds.
///
/// Band 0 sits on the low bound and the last band on the high bound; a
/// single band uses the geometric midpoint.
pub fn center_frequency(band: usize, count: usize, low: f32, high: f32) -> f32 {
    let t = if count > 1 {
        band as f32 / (count - 1) as f32
    } else {
        0.5
    };
    (low.ln() + t * (high.ln() - low.ln())).exp()
}

/// Convert a time constant in ms to a per-sample one-pole coefficient.
fn one_pole_coeff(time_ms: f32) -> f32 {
    // 0.1 ms floor keeps the exponent finite
    let ms = time_ms.max(0.1);
    1.0 - (-1.0 / (ms * 0.001 * SAMPLE_RATE)).exp()
}

impl CoeffTable {
    /// Recompute the whole table from validated parameters.
    pub fn compute(params: &VocoderParams) -> Self {
        let n = params.bands.count();
        let mut freq = [0.0f32; MAX_BANDS];
        let mut rq = [0.0f32; MAX_BANDS];

        // Q grows with sqrt(count) so neighboring bands keep overlapping.
        let q_recip = 1.0 / (1.0 + 0.5 * (n as f32).sqrt());

        for band in 0..n {
            let fc = center_frequency(band, n, params.freq_low, params.freq_high);
            freq[band] = (2.0 * (PI * fc / SAMPLE_RATE).sin()).min(1.0);
            rq[band] = q_recip;
        }

        Self {
            freq,
            rq,
            attack: one_pole_coeff(params.attack_ms),
            release: one_pole_coeff(params.release_ms),
        }
    }
}

/// Immutable parameters-plus-coefficients bundle published to the engine.
///
/// A snapshot is built whole on the control path and swapped in atomically,
/// so the audio path never sees a parameter set and a coefficient table
/// from different edits. A changed `reset_epoch` tells the engine to zero
/// its filter and envelope banks before using the new table.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub params: VocoderParams,
    pub coeffs: CoeffTable,
    pub reset_epoch: u64,
}

impl RenderSnapshot {
    /// Build a snapshot for the given parameters and epoch.
    pub fn build(params: VocoderParams, reset_epoch: u64) -> Self {
        Self {
            params,
            coeffs: CoeffTable::compute(&params),
            reset_epoch,
        }
    }
}
