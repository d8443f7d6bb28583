pub mod coeffs;
pub mod dsp;
pub mod error;
pub mod host;
pub mod instance;
pub mod meta;
pub mod params;
pub mod state;

use crate::dsp::engine::VocoderEngine;
use crate::host::ModulatorSource;
use crate::instance::VocoderHandle;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed processing rate in Hz; every coefficient assumes it.
pub const SAMPLE_RATE: f32 = 44100.0;

/// Build a vocoder instance from a modulator source and an optional
/// initial `state` JSON payload.
///
/// Returns the control handle and the render engine as a pair; hand the
/// engine to the audio thread and keep the handle wherever parameter
/// changes come from.
pub fn create<M>(modulator: M, initial_config: Option<&str>) -> (VocoderHandle, VocoderEngine)
where
    M: ModulatorSource + Send + 'static,
{
    instance::create(modulator, initial_config)
}
