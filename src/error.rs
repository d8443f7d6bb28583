use thiserror::Error;

/// Failures reported by the parameter read surface.
///
/// Writes never fail: out-of-range values are clamped and unknown keys are
/// ignored, so only `get_param` carries errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocoderError {
    /// The key names no parameter or metadata blob.
    #[error("unknown parameter key '{key}'")]
    UnknownParam { key: String },

    /// The caller's buffer cannot hold the rendered value. Nothing was
    /// written to it.
    #[error("output buffer too small: value needs {needed} bytes, buffer holds {capacity}")]
    OutputTooSmall { needed: usize, capacity: usize },
}
