use serde::Deserialize;

/// Colour mean seeded into every level of a defaulted pyramid.
pub const DEFAULT_COLOR_MEAN: f32 = 128.0;
/// Delta std seeded into every level of a defaulted pyramid.
pub const DEFAULT_DELTA_STD: f32 = 16.0;
/// Working resolution used when none is configured.
pub const DEFAULT_RESOLUTION: usize = 256;

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PyramidOptions {
    /// Side length of the finest level; must be a power of two.
    pub resolution: usize,
    /// Seed illustrative statistics instead of zeros.
    pub seed_defaults: bool,
    /// Colour mean written to every level (all channels) when seeding.
    pub default_color_mean: f32,
    /// Delta std written to every level (all channels) when seeding.
    pub default_delta_std: f32,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl PyramidOptions {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            seed_defaults: false,
            default_color_mean: DEFAULT_COLOR_MEAN,
            default_delta_std: DEFAULT_DELTA_STD,
        }
    }

    pub fn with_seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.seed_defaults = seed_defaults;
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
}
