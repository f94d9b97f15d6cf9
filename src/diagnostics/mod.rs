//! Serializable reports produced by the synthesis engine and the demos.
//!
//! `DecompositionReport` summarizes one upload: the global mean, the four
//! statistics of every pyramid level and a timing breakdown of the downsample
//! and residual cascades. `SynthesisReport` describes a single resynthesis.

pub mod pyramid;
pub mod synthesis;
pub mod timing;

pub use pyramid::{DecompositionReport, LevelStatsReport};
pub use synthesis::SynthesisReport;
pub use timing::{StageTiming, TimingBreakdown};

use nalgebra::Vector4;

pub(crate) fn to_array(v: &Vector4<f32>) -> [f32; 4] {
    [v.x, v.y, v.z, v.w]
}
