//! Square RGBA colour/residual pyramid.
//!
//! A [`Pyramid`] holds one [`PyramidLevel`] per power of two from `1` up to
//! the working resolution, coarsest first. Each level pairs a colour unit
//! with a delta unit, the residual between the level's colour and the
//! nearest-neighbour magnification of the next coarser colour.
//!
//! Resolution changes go through [`resample`] only: box decimation on the
//! way down and nearest-neighbour magnification on the way up.

mod options;
pub mod resample;

#[cfg(test)]
mod tests;

pub use options::{PyramidOptions, DEFAULT_COLOR_MEAN, DEFAULT_DELTA_STD, DEFAULT_RESOLUTION};
pub use resample::{downsample_box, upsample_nearest};

use crate::error::SynthError;
use crate::stats::StatImage;
use nalgebra::Vector4;

/// One resolution step: colour plus residual.
#[derive(Clone, Debug, PartialEq)]
pub struct PyramidLevel {
    pub resolution: usize,
    pub color: StatImage,
    pub delta: StatImage,
}

impl PyramidLevel {
    /// Zero-filled level with zero statistics.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            color: StatImage::zeros(resolution),
            delta: StatImage::zeros(resolution),
        }
    }

    /// Copy all four statistics of `other` (values only, arrays untouched).
    pub fn copy_stats_from(&mut self, other: &PyramidLevel) {
        self.color.copy_stats_from(&other.color);
        self.delta.copy_stats_from(&other.delta);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pyramid {
    pub levels: Vec<PyramidLevel>,
}

impl Pyramid {
    /// Build an empty pyramid for `resolution`, optionally seeded with the
    /// default illustrative statistics.
    pub fn build(resolution: usize, seed_defaults: bool) -> Result<Self, SynthError> {
        Self::build_with_options(PyramidOptions::new(resolution).with_seed_defaults(seed_defaults))
    }

    pub fn build_with_options(options: PyramidOptions) -> Result<Self, SynthError> {
        let count = level_count(options.resolution)?;
        let mut levels: Vec<PyramidLevel> =
            (0..count).map(|n| PyramidLevel::new(1usize << n)).collect();

        if options.seed_defaults {
            let mean = Vector4::repeat(options.default_color_mean);
            let std = Vector4::repeat(options.default_delta_std);
            for level in &mut levels {
                level.color.mean = mean;
                level.delta.std = std;
            }
        }

        Ok(Self { levels })
    }

    /// Side length of the finest level.
    pub fn resolution(&self) -> usize {
        self.levels.last().map_or(0, |l| l.resolution)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> Option<&PyramidLevel> {
        self.levels.get(index)
    }

    pub fn coarsest(&self) -> Option<&PyramidLevel> {
        self.levels.first()
    }

    pub fn finest(&self) -> Option<&PyramidLevel> {
        self.levels.last()
    }

    /// Magnification factor from level `index` to the finest level.
    pub fn scale_for_level(&self, index: usize) -> usize {
        match self.levels.get(index) {
            Some(level) if level.resolution > 0 => self.resolution() / level.resolution,
            _ => 1,
        }
    }

    /// Copy every level's statistics from `source` by value.
    pub fn copy_stats_from(&mut self, source: &Pyramid) {
        for (dst, src) in self.levels.iter_mut().zip(&source.levels) {
            dst.copy_stats_from(src);
        }
    }
}

/// Number of pyramid levels for a power-of-two `resolution` (`log2 + 1`).
pub fn level_count(resolution: usize) -> Result<usize, SynthError> {
    validate_resolution(resolution)?;
    Ok(resolution.trailing_zeros() as usize + 1)
}

/// Reject zero and non-power-of-two resolutions.
pub fn validate_resolution(resolution: usize) -> Result<(), SynthError> {
    if resolution.is_power_of_two() {
        Ok(())
    } else {
        Err(SynthError::InvalidResolution { resolution })
    }
}
