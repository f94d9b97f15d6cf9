#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pyramid;
pub mod stats;
pub mod synth;

// Helpers for the demo binaries and animated previews.
pub mod animation;
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: engine + options.
pub use crate::error::SynthError;
pub use crate::synth::{SynthEngine, SynthOptions};

// Building blocks that are useful on their own.
pub use crate::pyramid::{downsample_box, upsample_nearest, Pyramid, PyramidLevel, PyramidOptions};
pub use crate::stats::StatImage;

// Reports returned by the `*_with_diagnostics` calls.
pub use crate::diagnostics::{DecompositionReport, SynthesisReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pyramid_synth::prelude::*;
/// use rand::SeedableRng;
///
/// # fn main() -> Result<(), SynthError> {
/// let res = 64usize;
/// let pixels = vec![128.0f32; res * res * 4];
///
/// let mut engine = SynthEngine::new(res)?;
/// engine.decompose(&pixels)?;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let level = engine.resynthesize(1.0, &mut rng)?;
/// println!("level={level} bytes={}", engine.flatten_output().len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgbaF32;
    pub use crate::{SynthEngine, SynthError, SynthOptions};
}
