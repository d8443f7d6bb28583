//! Wire types for the `state` parameter key: full snapshot out, patch in.

use serde::{Deserialize, Serialize};

use crate::params::{BandCount, VocoderParams};

/// Full parameter snapshot as it goes over the wire.
///
/// Values are rounded to their wire precision before encoding (one decimal
/// for frequencies and times, two for gains and mixes), so the emitted
/// JSON agrees with what the scalar gets report. Field order matches the
/// scalar key order.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub bands: u32,
    pub freq_low: f32,
    pub freq_high: f32,
    pub attack: f32,
    pub release: f32,
    pub mod_gain: f32,
    pub mix: f32,
    pub carrier_mix: f32,
}

impl StateSnapshot {
    /// Capture the current parameters at wire precision.
    pub fn from_params(params: &VocoderParams) -> Self {
        Self {
            bands: params.bands.count() as u32,
            freq_low: round1(params.freq_low),
            freq_high: round1(params.freq_high),
            attack: round1(params.attack_ms),
            release: round1(params.release_ms),
            mod_gain: round2(params.mod_gain),
            mix: round2(params.mix),
            carrier_mix: round2(params.carrier_mix),
        }
    }

    /// Encode as a JSON object.
    pub fn to_json(&self) -> String {
        // A flat struct of numbers; serialization has no failure path.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Partial parameter update parsed from a `state` payload.
///
/// Every field is independently optional: absent fields leave the current
/// value in place, and unrecognized fields in the payload are ignored. All
/// numbers are accepted as JSON numbers; `bands` snaps to the supported
/// set on apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatePatch {
    pub bands: Option<f64>,
    pub freq_low: Option<f64>,
    pub freq_high: Option<f64>,
    pub attack: Option<f64>,
    pub release: Option<f64>,
    pub mod_gain: Option<f64>,
    pub mix: Option<f64>,
    pub carrier_mix: Option<f64>,
}

impl StatePatch {
    /// Apply every present field to `params`, clamping through the setters.
    pub fn apply(&self, params: &mut VocoderParams) {
        if let Some(bands) = self.bands {
            params.bands = BandCount::from_request(bands as i32);
        }
        if let Some(hz) = self.freq_low {
            params.set_freq_low(hz as f32);
        }
        if let Some(hz) = self.freq_high {
            params.set_freq_high(hz as f32);
        }
        if let Some(ms) = self.attack {
            params.set_attack(ms as f32);
        }
        if let Some(ms) = self.release {
            params.set_release(ms as f32);
        }
        if let Some(gain) = self.mod_gain {
            params.set_mod_gain(gain as f32);
        }
        if let Some(mix) = self.mix {
            params.set_mix(mix as f32);
        }
        if let Some(mix) = self.carrier_mix {
            params.set_carrier_mix(mix as f32);
        }
    }
}

// Same decimal rounding as the scalar get formatting.
fn round1(value: f32) -> f32 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn round2(value: f32) -> f32 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_json() {
        let snapshot = StateSnapshot::from_params(&VocoderParams::default());
        assert_eq!(
            snapshot.to_json(),
            "{\"bands\":16,\"freq_low\":100.0,\"freq_high\":8000.0,\
             \"attack\":5.0,\"release\":50.0,\"mod_gain\":1.0,\
             \"mix\":1.0,\"carrier_mix\":0.1}"
        );
    }

    #[test]
    fn test_snapshot_rounds_to_wire_precision() {
        let mut params = VocoderParams::default();
        params.set_attack(12.34);
        params.set_mod_gain(1.005);
        params.set_release(99.95);
        let snapshot = StateSnapshot::from_params(&params);
        assert_eq!(snapshot.attack, 12.3);
        // 1.005f32 and 99.95f32 sit just below their decimal boundaries;
        // they round down, exactly as the scalar gets print them.
        assert_eq!(snapshot.mod_gain, 1.0);
        assert_eq!(snapshot.release, 99.9);
        assert!(snapshot.to_json().contains("\"attack\":12.3"));
    }

    #[test]
    fn test_patch_parses_partial_payload() {
        let patch: StatePatch = serde_json::from_str("{\"bands\":24,\"mix\":0.5}").unwrap();
        assert_eq!(patch.bands, Some(24.0));
        assert_eq!(patch.mix, Some(0.5));
        assert_eq!(patch.freq_low, None);
        assert_eq!(patch.carrier_mix, None);
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let patch: StatePatch =
            serde_json::from_str("{\"bands\":8,\"color\":\"purple\",\"nested\":{\"a\":1}}").unwrap();
        assert_eq!(patch.bands, Some(8.0));
    }

    #[test]
    fn test_patch_rejects_non_object_payloads() {
        assert!(serde_json::from_str::<StatePatch>("not json at all").is_err());
        assert!(serde_json::from_str::<StatePatch>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<StatePatch>("{\"mix\":\"loud\"}").is_err());
    }

    #[test]
    fn test_apply_updates_and_clamps() {
        let mut params = VocoderParams::default();
        let patch: StatePatch = serde_json::from_str(
            "{\"bands\":21,\"freq_low\":10.0,\"freq_high\":6000.0,\"mix\":2.5}",
        )
        .unwrap();
        patch.apply(&mut params);

        assert_eq!(params.bands.count(), 24);
        assert_eq!(params.freq_low, 80.0);
        assert_eq!(params.freq_high, 6000.0);
        assert_eq!(params.mix, 1.0);
        // Untouched fields keep their values.
        assert_eq!(params.attack_ms, 5.0);
        assert_eq!(params.release_ms, 50.0);
    }

    #[test]
    fn test_snapshot_parses_back_as_patch() {
        let mut params = VocoderParams::default();
        params.set_release(123.4);
        params.set_carrier_mix(0.25);
        let json = StateSnapshot::from_params(&params).to_json();

        let patch: StatePatch = serde_json::from_str(&json).unwrap();
        let mut restored = VocoderParams::default();
        patch.apply(&mut restored);
        assert_eq!(restored, params);
    }
}
