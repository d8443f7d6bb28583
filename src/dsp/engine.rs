//! Block processor — the audio-side half of a vocoder instance.
//!
//! `VocoderEngine` owns every piece of running DSP state: four bandpass
//! filter banks (modulator and carrier, left and right), two envelope
//! banks on the modulator path, and the noise generator. Parameters and
//! coefficients arrive as immutable render snapshots published by the
//! control side; the engine loads exactly one snapshot per block, never
//! locks, and never allocates on the hot path.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::coeffs::{MAX_BANDS, RenderSnapshot};
use crate::dsp::envelope::EnvelopeFollower;
use crate::dsp::filter::BandpassFilter;
use crate::dsp::noise::NoiseSource;
use crate::host::ModulatorSource;

/// Noise generator seed applied at creation.
const NOISE_SEED: u32 = 12345;

/// The render half of a vocoder instance; moves to the audio thread.
///
/// Created by [`create`](crate::create) together with its control handle.
/// Each [`process_block`](Self::process_block) call vocodes one carrier
/// block in place against the modulator block pulled from the injected
/// source.
pub struct VocoderEngine {
    config: Arc<ArcSwap<RenderSnapshot>>,
    modulator: Box<dyn ModulatorSource + Send>,
    seen_epoch: u64,

    mod_filter_l: [BandpassFilter; MAX_BANDS],
    mod_filter_r: [BandpassFilter; MAX_BANDS],
    car_filter_l: [BandpassFilter; MAX_BANDS],
    car_filter_r: [BandpassFilter; MAX_BANDS],
    mod_env_l: [EnvelopeFollower; MAX_BANDS],
    mod_env_r: [EnvelopeFollower; MAX_BANDS],
    noise: NoiseSource,
}

impl VocoderEngine {
    pub(crate) fn new(
        config: Arc<ArcSwap<RenderSnapshot>>,
        modulator: Box<dyn ModulatorSource + Send>,
    ) -> Self {
        let seen_epoch = config.load().reset_epoch;
        Self {
            config,
            modulator,
            seen_epoch,
            mod_filter_l: [BandpassFilter::new(); MAX_BANDS],
            mod_filter_r: [BandpassFilter::new(); MAX_BANDS],
            car_filter_l: [BandpassFilter::new(); MAX_BANDS],
            car_filter_r: [BandpassFilter::new(); MAX_BANDS],
            mod_env_l: [EnvelopeFollower::new(); MAX_BANDS],
            mod_env_r: [EnvelopeFollower::new(); MAX_BANDS],
            noise: NoiseSource::new(NOISE_SEED),
        }
    }

    /// Vocode one block in place.
    ///
    /// `carrier` is interleaved stereo i16; `carrier.len() / 2` frames are
    /// processed and overwritten (a trailing odd sample is left alone).
    /// The carrier is left untouched when the modulator source cannot
    /// supply a matching block.
    pub fn process_block(&mut self, carrier: &mut [i16]) {
        let frames = carrier.len() / 2;
        if frames == 0 {
            return;
        }

        // One snapshot per block; a torn parameter set is impossible.
        let snapshot = self.config.load();
        if snapshot.reset_epoch != self.seen_epoch {
            self.seen_epoch = snapshot.reset_epoch;
            self.clear_state();
        }

        let modulator = match self.modulator.modulator_block(frames) {
            Some(block) if block.len() >= frames * 2 => block,
            _ => return,
        };

        let bands = snapshot.params.bands.count();
        let freq = &snapshot.coeffs.freq[..bands];
        let rq = &snapshot.coeffs.rq[..bands];
        let attack = snapshot.coeffs.attack;
        let release = snapshot.coeffs.release;
        let mod_gain = snapshot.params.mod_gain;
        let wet = snapshot.params.mix;
        let dry = 1.0 - wet;
        let noise_mix = snapshot.params.carrier_mix;
        // More bands accumulate more energy; keep the level comparable.
        let scale = 2.0 / (bands as f32).sqrt();

        for i in 0..frames {
            let car_l = carrier[i * 2] as f32 / 32768.0;
            let car_r = carrier[i * 2 + 1] as f32 / 32768.0;

            let mod_l = modulator[i * 2] as f32 / 32768.0 * mod_gain;
            let mod_r = modulator[i * 2 + 1] as f32 / 32768.0 * mod_gain;

            // One noise draw per frame, shared by both carrier channels,
            // keeps unvoiced consonants audible through tonal carriers.
            let noise = self.noise.next_sample() * noise_mix;
            let car_noise_l = car_l + noise;
            let car_noise_r = car_r + noise;

            let mut wet_l = 0.0f32;
            let mut wet_r = 0.0f32;

            for b in 0..bands {
                let f = freq[b];
                let q = rq[b];

                let band_l = self.mod_filter_l[b].process(mod_l, f, q);
                let band_r = self.mod_filter_r[b].process(mod_r, f, q);
                let env_l = self.mod_env_l[b].process(band_l, attack, release);
                let env_r = self.mod_env_r[b].process(band_r, attack, release);

                let car_band_l = self.car_filter_l[b].process(car_noise_l, f, q);
                let car_band_r = self.car_filter_r[b].process(car_noise_r, f, q);

                wet_l += car_band_l * env_l;
                wet_r += car_band_r * env_r;
            }

            let out_l = (wet_l * scale * wet + car_l * dry).clamp(-1.0, 1.0);
            let out_r = (wet_r * scale * wet + car_r * dry).clamp(-1.0, 1.0);

            carrier[i * 2] = (out_l * 32767.0) as i16;
            carrier[i * 2 + 1] = (out_r * 32767.0) as i16;
        }
    }

    /// Zero every filter and envelope bank. The noise seed keeps running.
    fn clear_state(&mut self) {
        self.mod_filter_l.fill(BandpassFilter::new());
        self.mod_filter_r.fill(BandpassFilter::new());
        self.car_filter_l.fill(BandpassFilter::new());
        self.car_filter_r.fill(BandpassFilter::new());
        self.mod_env_l.fill(EnvelopeFollower::new());
        self.mod_env_r.fill(EnvelopeFollower::new());
    }
}
