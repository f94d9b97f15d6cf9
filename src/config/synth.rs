use crate::synth::SynthOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SynthDemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub engine: SynthOptions,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    pub output: SynthOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Detail values to render, each in `[0, 1]`.
    pub details: Vec<f64>,
    /// Seed for the noise generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            details: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            seed: Some(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SynthOutputConfig {
    /// Directory receiving one PNG per detail value.
    pub image_dir: PathBuf,
    /// Optional JSON file with the decomposition and synthesis reports.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SynthDemoConfig, String> {
    super::load_json(path)
}
