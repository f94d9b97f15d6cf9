//! Error type shared by the pyramid, resampler and synthesis engine.
//!
//! Every variant is a contract violation detected at the call boundary.
//! None of them is transient, so callers should surface them rather than
//! retry.

/// Reasons a pyramid or synthesis operation may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynthError {
    /// Requested side length is zero or not a power of two.
    InvalidResolution { resolution: usize },
    /// Flat input buffer does not hold `resolution² × 4` samples.
    ShapeMismatch { expected: usize, actual: usize },
    /// Box downsampling target does not evenly divide the source side.
    NonDivisibleResolution { side: usize, target: usize },
    /// Nearest-neighbour magnification target is not a multiple of the source side.
    NonMultipleResolution { side: usize, target: usize },
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::InvalidResolution { resolution } => {
                write!(f, "invalid resolution {resolution} (must be a power of two)")
            }
            SynthError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected} samples, got {actual}")
            }
            SynthError::NonDivisibleResolution { side, target } => {
                write!(f, "cannot box-downsample side {side} to {target}")
            }
            SynthError::NonMultipleResolution { side, target } => {
                write!(f, "cannot magnify side {side} to {target}")
            }
        }
    }
}

impl std::error::Error for SynthError {}

#[cfg(test)]
mod tests {
    use super::SynthError;

    #[test]
    fn display_mentions_offending_values() {
        let err = SynthError::ShapeMismatch {
            expected: 64,
            actual: 60,
        };
        let msg = err.to_string();
        assert!(msg.contains("64") && msg.contains("60"), "got {msg}");

        let err = SynthError::InvalidResolution { resolution: 12 };
        assert!(err.to_string().contains("12"));
    }
}
