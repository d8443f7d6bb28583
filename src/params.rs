//! Validated parameter store and the closed set of wire parameter keys.

/// Number of vocoder bands; the engine supports exactly these four sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCount {
    Eight,
    Sixteen,
    TwentyFour,
    ThirtyTwo,
}

impl BandCount {
    /// Snap an arbitrary request onto the supported set: 12 and below give
    /// 8, 13-20 give 16, 21-28 give 24, 29 and up give 32.
    pub fn from_request(requested: i32) -> Self {
        if requested <= 12 {
            Self::Eight
        } else if requested <= 20 {
            Self::Sixteen
        } else if requested <= 28 {
            Self::TwentyFour
        } else {
            Self::ThirtyTwo
        }
    }

    /// The numeric band count.
    pub const fn count(self) -> usize {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::TwentyFour => 24,
            Self::ThirtyTwo => 32,
        }
    }
}

/// User-facing vocoder controls.
///
/// The setters clamp into the documented ranges, so values that went
/// through them are always valid. Fields are public in the spirit of the
/// other DSP structs; code inside the crate only mutates through the
/// setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VocoderParams {
    /// Number of filterbank bands.
    pub bands: BandCount,
    /// Lowest band center in Hz, 80 to 500.
    pub freq_low: f32,
    /// Highest band center in Hz, 2000 to 12000.
    pub freq_high: f32,
    /// Envelope attack time in ms, 0.1 to 50.
    pub attack_ms: f32,
    /// Envelope release time in ms, 5 to 500.
    pub release_ms: f32,
    /// Modulator input gain, 0 to 3.
    pub mod_gain: f32,
    /// Wet/dry mix, 0 = dry carrier only, 1 = vocoded signal only.
    pub mix: f32,
    /// Noise level added to the carrier for unvoiced content, 0 to 1.
    pub carrier_mix: f32,
}

impl Default for VocoderParams {
    fn default() -> Self {
        Self {
            bands: BandCount::Sixteen,
            freq_low: 100.0,
            freq_high: 8000.0,
            attack_ms: 5.0,
            release_ms: 50.0,
            mod_gain: 1.0,
            mix: 1.0,
            carrier_mix: 0.1,
        }
    }
}

impl VocoderParams {
    pub fn set_freq_low(&mut self, hz: f32) {
        self.freq_low = hz.clamp(80.0, 500.0);
    }

    pub fn set_freq_high(&mut self, hz: f32) {
        self.freq_high = hz.clamp(2000.0, 12000.0);
    }

    pub fn set_attack(&mut self, ms: f32) {
        self.attack_ms = ms.clamp(0.1, 50.0);
    }

    pub fn set_release(&mut self, ms: f32) {
        self.release_ms = ms.clamp(5.0, 500.0);
    }

    pub fn set_mod_gain(&mut self, gain: f32) {
        self.mod_gain = gain.clamp(0.0, 3.0);
    }

    pub fn set_mix(&mut self, mix: f32) {
        self.mix = mix.clamp(0.0, 1.0);
    }

    pub fn set_carrier_mix(&mut self, mix: f32) {
        self.carrier_mix = mix.clamp(0.0, 1.0);
    }
}

/// Closed set of wire parameter keys.
///
/// [`ParamKey::lookup`] resolves the external string key once; everything
/// after that dispatches through exhaustive matches. `Name`,
/// `UiHierarchy`, and `ChainParams` are read-only metadata keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Bands,
    FreqLow,
    FreqHigh,
    Attack,
    Release,
    ModGain,
    Mix,
    CarrierMix,
    State,
    Name,
    UiHierarchy,
    ChainParams,
}

impl ParamKey {
    /// Resolve a wire key; `None` for anything outside the set.
    pub fn lookup(key: &str) -> Option<Self> {
        Some(match key {
            "bands" => Self::Bands,
            "freq_low" => Self::FreqLow,
            "freq_high" => Self::FreqHigh,
            "attack" => Self::Attack,
            "release" => Self::Release,
            "mod_gain" => Self::ModGain,
            "mix" => Self::Mix,
            "carrier_mix" => Self::CarrierMix,
            "state" => Self::State,
            "name" => Self::Name,
            "ui_hierarchy" => Self::UiHierarchy,
            "chain_params" => Self::ChainParams,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_count_snap_windows() {
        // Everything at or below 12 lands on 8, including nonsense input.
        for request in [-100, 0, 1, 8, 12] {
            assert_eq!(BandCount::from_request(request), BandCount::Eight, "request {request}");
        }
        for request in [13, 16, 20] {
            assert_eq!(BandCount::from_request(request), BandCount::Sixteen, "request {request}");
        }
        for request in [21, 24, 28] {
            assert_eq!(BandCount::from_request(request), BandCount::TwentyFour, "request {request}");
        }
        for request in [29, 32, 1000] {
            assert_eq!(BandCount::from_request(request), BandCount::ThirtyTwo, "request {request}");
        }
    }

    #[test]
    fn test_band_count_values() {
        assert_eq!(BandCount::Eight.count(), 8);
        assert_eq!(BandCount::Sixteen.count(), 16);
        assert_eq!(BandCount::TwentyFour.count(), 24);
        assert_eq!(BandCount::ThirtyTwo.count(), 32);
    }

    #[test]
    fn test_default_params() {
        let params = VocoderParams::default();
        assert_eq!(params.bands, BandCount::Sixteen);
        assert_eq!(params.freq_low, 100.0);
        assert_eq!(params.freq_high, 8000.0);
        assert_eq!(params.attack_ms, 5.0);
        assert_eq!(params.release_ms, 50.0);
        assert_eq!(params.mod_gain, 1.0);
        assert_eq!(params.mix, 1.0);
        assert_eq!(params.carrier_mix, 0.1);
    }

    #[test]
    fn test_setters_clamp_to_range() {
        let mut params = VocoderParams::default();

        params.set_freq_low(10.0);
        assert_eq!(params.freq_low, 80.0);
        params.set_freq_low(9999.0);
        assert_eq!(params.freq_low, 500.0);

        params.set_freq_high(100.0);
        assert_eq!(params.freq_high, 2000.0);
        params.set_freq_high(99999.0);
        assert_eq!(params.freq_high, 12000.0);

        params.set_attack(0.0);
        assert_eq!(params.attack_ms, 0.1);
        params.set_attack(1000.0);
        assert_eq!(params.attack_ms, 50.0);

        params.set_release(0.0);
        assert_eq!(params.release_ms, 5.0);
        params.set_release(10000.0);
        assert_eq!(params.release_ms, 500.0);

        params.set_mod_gain(-1.0);
        assert_eq!(params.mod_gain, 0.0);
        params.set_mod_gain(10.0);
        assert_eq!(params.mod_gain, 3.0);

        params.set_mix(-0.5);
        assert_eq!(params.mix, 0.0);
        params.set_mix(1.5);
        assert_eq!(params.mix, 1.0);

        params.set_carrier_mix(-0.5);
        assert_eq!(params.carrier_mix, 0.0);
        params.set_carrier_mix(2.0);
        assert_eq!(params.carrier_mix, 1.0);
    }

    #[test]
    fn test_setters_keep_in_range_values() {
        let mut params = VocoderParams::default();
        params.set_freq_low(250.0);
        assert_eq!(params.freq_low, 250.0);
        params.set_attack(12.5);
        assert_eq!(params.attack_ms, 12.5);
        params.set_mix(0.5);
        assert_eq!(params.mix, 0.5);
    }

    #[test]
    fn test_param_key_lookup() {
        assert_eq!(ParamKey::lookup("bands"), Some(ParamKey::Bands));
        assert_eq!(ParamKey::lookup("freq_low"), Some(ParamKey::FreqLow));
        assert_eq!(ParamKey::lookup("freq_high"), Some(ParamKey::FreqHigh));
        assert_eq!(ParamKey::lookup("attack"), Some(ParamKey::Attack));
        assert_eq!(ParamKey::lookup("release"), Some(ParamKey::Release));
        assert_eq!(ParamKey::lookup("mod_gain"), Some(ParamKey::ModGain));
        assert_eq!(ParamKey::lookup("mix"), Some(ParamKey::Mix));
        assert_eq!(ParamKey::lookup("carrier_mix"), Some(ParamKey::CarrierMix));
        assert_eq!(ParamKey::lookup("state"), Some(ParamKey::State));
        assert_eq!(ParamKey::lookup("name"), Some(ParamKey::Name));
        assert_eq!(ParamKey::lookup("ui_hierarchy"), Some(ParamKey::UiHierarchy));
        assert_eq!(ParamKey::lookup("chain_params"), Some(ParamKey::ChainParams));
    }

    #[test]
    fn test_param_key_lookup_rejects_unknown() {
        assert_eq!(ParamKey::lookup(""), None);
        assert_eq!(ParamKey::lookup("Bands"), None);
        assert_eq!(ParamKey::lookup("frequency"), None);
        assert_eq!(ParamKey::lookup("bands "), None);
    }
}
