//! Instance construction and the control-side parameter surface.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::coeffs::RenderSnapshot;
use crate::dsp::engine::VocoderEngine;
use crate::error::VocoderError;
use crate::host::ModulatorSource;
use crate::meta;
use crate::params::{BandCount, ParamKey, VocoderParams};
use crate::state::{StatePatch, StateSnapshot};

/// Display name reported under the `name` key.
const DISPLAY_NAME: &str = "Vocoder";

/// Build a vocoder instance: a control handle and its render engine.
///
/// The engine pulls modulator audio from `modulator` and is meant to move
/// to the audio thread; the handle stays behind and drives it through
/// published snapshots. `initial_config` takes the same JSON accepted by
/// the `state` key; `None` or a blank string starts from the defaults, and
/// a malformed payload is logged and ignored rather than failing creation.
pub fn create<M>(modulator: M, initial_config: Option<&str>) -> (VocoderHandle, VocoderEngine)
where
    M: ModulatorSource + Send + 'static,
{
    let mut params = VocoderParams::default();
    if let Some(config) = initial_config.filter(|c| !c.trim().is_empty()) {
        match serde_json::from_str::<StatePatch>(config) {
            Ok(patch) => patch.apply(&mut params),
            Err(err) => log::warn!("ignoring malformed initial config: {err}"),
        }
    }

    let shared = Arc::new(ArcSwap::from_pointee(RenderSnapshot::build(params, 0)));
    let engine = VocoderEngine::new(shared.clone(), Box::new(modulator));
    log::info!("created vocoder instance with {} bands", params.bands.count());

    let handle = VocoderHandle {
        params,
        reset_epoch: 0,
        shared,
    };
    (handle, engine)
}

/// The control half of a vocoder instance.
///
/// Holds the validated parameters and publishes an immutable
/// [`RenderSnapshot`] after every change; the engine picks the latest one
/// up at the start of its next block.
pub struct VocoderHandle {
    params: VocoderParams,
    reset_epoch: u64,
    shared: Arc<ArcSwap<RenderSnapshot>>,
}

impl VocoderHandle {
    /// Set a parameter from its wire string.
    ///
    /// Unknown keys and writes to read-only keys are logged and ignored.
    /// A band-count change or a `state` restore also schedules a filter
    /// reset on the audio side.
    pub fn set_param(&mut self, key: &str, value: &str) {
        let Some(param) = ParamKey::lookup(key) else {
            log::debug!("ignoring unknown parameter key '{key}'");
            return;
        };
        match param {
            ParamKey::State => self.apply_state(value),
            ParamKey::Name | ParamKey::UiHierarchy | ParamKey::ChainParams => {
                log::debug!("ignoring write to read-only key '{key}'");
            }
            ParamKey::Bands => {
                let requested = BandCount::from_request(parse_scalar(value) as i32);
                if requested != self.params.bands {
                    self.params.bands = requested;
                    self.reset_epoch += 1;
                    self.publish();
                }
            }
            ParamKey::FreqLow => {
                self.params.set_freq_low(parse_scalar(value));
                self.publish();
            }
            ParamKey::FreqHigh => {
                self.params.set_freq_high(parse_scalar(value));
                self.publish();
            }
            ParamKey::Attack => {
                self.params.set_attack(parse_scalar(value));
                self.publish();
            }
            ParamKey::Release => {
                self.params.set_release(parse_scalar(value));
                self.publish();
            }
            ParamKey::ModGain => {
                self.params.set_mod_gain(parse_scalar(value));
                self.publish();
            }
            ParamKey::Mix => {
                self.params.set_mix(parse_scalar(value));
                self.publish();
            }
            ParamKey::CarrierMix => {
                self.params.set_carrier_mix(parse_scalar(value));
                self.publish();
            }
        }
    }

    /// Read a parameter into `out`; returns the number of bytes written.
    ///
    /// Nothing is written unless the whole value fits.
    pub fn get_param(&self, key: &str, out: &mut [u8]) -> Result<usize, VocoderError> {
        let text = self.format_param(key)?;
        let bytes = text.as_bytes();
        if bytes.len() > out.len() {
            return Err(VocoderError::OutputTooSmall {
                needed: bytes.len(),
                capacity: out.len(),
            });
        }
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Read a parameter as an owned string.
    pub fn format_param(&self, key: &str) -> Result<String, VocoderError> {
        let Some(param) = ParamKey::lookup(key) else {
            return Err(VocoderError::UnknownParam { key: key.to_string() });
        };
        Ok(match param {
            ParamKey::Bands => format!("{}", self.params.bands.count()),
            ParamKey::FreqLow => format!("{:.1}", self.params.freq_low),
            ParamKey::FreqHigh => format!("{:.1}", self.params.freq_high),
            ParamKey::Attack => format!("{:.1}", self.params.attack_ms),
            ParamKey::Release => format!("{:.1}", self.params.release_ms),
            ParamKey::ModGain => format!("{:.2}", self.params.mod_gain),
            ParamKey::Mix => format!("{:.2}", self.params.mix),
            ParamKey::CarrierMix => format!("{:.2}", self.params.carrier_mix),
            ParamKey::State => StateSnapshot::from_params(&self.params).to_json(),
            ParamKey::Name => DISPLAY_NAME.to_string(),
            ParamKey::UiHierarchy => meta::UI_HIERARCHY.clone(),
            ParamKey::ChainParams => meta::CHAIN_PARAMS.clone(),
        })
    }

    /// Current validated parameters.
    pub fn params(&self) -> &VocoderParams {
        &self.params
    }

    /// The snapshot the engine will see at its next block.
    pub fn snapshot(&self) -> Arc<RenderSnapshot> {
        self.shared.load_full()
    }

    fn apply_state(&mut self, payload: &str) {
        match serde_json::from_str::<StatePatch>(payload) {
            Ok(patch) => patch.apply(&mut self.params),
            Err(err) => log::warn!("state payload not applied: {err}"),
        }
        // A restore clears DSP state whether or not the payload parsed.
        self.reset_epoch += 1;
        self.publish();
    }

    fn publish(&self) {
        self.shared
            .store(Arc::new(RenderSnapshot::build(self.params, self.reset_epoch)));
    }
}

/// Scalar wire values parse leniently: garbage and non-finite text read as
/// zero and the setters clamp from there.
fn parse_scalar(value: &str) -> f32 {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
