//! Host seam supplying the modulator signal.

/// Source of the modulator signal, pulled by the engine once per block.
///
/// Implementations hand out interleaved stereo i16 samples matching the
/// carrier block: at least `frames * 2` samples, or `None` when no input is
/// available right now. On `None` (or a short block) the engine skips the
/// block and leaves the carrier untouched.
///
/// The source is injected at [`create`](crate::create), so hosts, tests, and
/// offline tools each bind their own transport; nothing is process-global.
/// The `&mut self` receiver lets sources advance an internal cursor.
pub trait ModulatorSource {
    /// The next block of interleaved stereo samples, or `None` if
    /// unavailable.
    fn modulator_block(&mut self, frames: usize) -> Option<&[i16]>;
}

/// A source with no input path; every block is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullModulator;

impl ModulatorSource for NullModulator {
    fn modulator_block(&mut self, _frames: usize) -> Option<&[i16]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_modulator_never_supplies_a_block() {
        let mut source = NullModulator;
        assert!(source.modulator_block(0).is_none());
        assert!(source.modulator_block(128).is_none());
    }
}
