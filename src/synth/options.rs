use crate::pyramid::{PyramidOptions, DEFAULT_COLOR_MEAN, DEFAULT_DELTA_STD, DEFAULT_RESOLUTION};
use serde::Deserialize;

/// Engine-wide configuration.
///
/// The target pyramid is always seeded with the defaults below, so there is
/// no `seed_defaults` switch here; unknown keys are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthOptions {
    /// Working resolution (power of two) shared by both pyramids.
    pub resolution: usize,
    /// Colour mean seeded into the target pyramid before any upload.
    pub default_color_mean: f32,
    /// Delta std seeded into the target pyramid before any upload.
    pub default_delta_std: f32,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl SynthOptions {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            default_color_mean: DEFAULT_COLOR_MEAN,
            default_delta_std: DEFAULT_DELTA_STD,
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_default_color_mean(mut self, mean: f32) -> Self {
        self.default_color_mean = mean;
        self
    }

    pub fn with_default_delta_std(mut self, std: f32) -> Self {
        self.default_delta_std = std;
        self
    }

    /// Options for the literal decomposition pyramid (zero-filled).
    pub fn base_pyramid(&self) -> PyramidOptions {
        PyramidOptions::new(self.resolution)
    }

    /// Options for the statistics-only target pyramid (seeded defaults).
    pub fn target_pyramid(&self) -> PyramidOptions {
        PyramidOptions::new(self.resolution)
            .with_seed_defaults(true)
            .with_default_color_mean(self.default_color_mean)
            .with_default_delta_std(self.default_delta_std)
    }
}
