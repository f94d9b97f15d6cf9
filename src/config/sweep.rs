use crate::synth::SynthOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub engine: SynthOptions,
    #[serde(default)]
    pub sweep: SweepParams,
    pub output: SweepOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SweepParams {
    /// Number of frames to render.
    pub frames: usize,
    /// Seconds of animation time per frame.
    pub dt: f64,
    /// Time scale applied by the detail animator.
    pub speed: f64,
    /// Base seed; frame `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            frames: 60,
            dt: 1.0 / 15.0,
            speed: crate::animation::DEFAULT_SPEED,
            seed: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SweepOutputConfig {
    pub frame_dir: PathBuf,
    #[serde(default)]
    pub timing_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SweepConfig, String> {
    super::load_json(path)
}
