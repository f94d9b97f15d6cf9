//! Synthesis engine owning the base and target pyramids.
//!
//! Typical usage:
//! ```no_run
//! use pyramid_synth::SynthEngine;
//! use rand::SeedableRng;
//!
//! # fn example(pixels: &[f32]) -> Result<(), pyramid_synth::SynthError> {
//! let mut engine = SynthEngine::new(256)?;
//! engine.decompose(pixels)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! engine.resynthesize(0.5, &mut rng)?;
//! let bytes = engine.flatten_output();
//! assert_eq!(bytes.len(), 256 * 256 * 4);
//! # Ok(())
//! # }
//! ```
use super::detail::{clamp_detail, level_index_for_detail};
use super::options::SynthOptions;
use super::reconstruct::{reconstruct_chain, OPAQUE};
use crate::diagnostics::{DecompositionReport, SynthesisReport, TimingBreakdown};
use crate::error::SynthError;
use crate::image::{ImageRgbaF32, ImageRgbaU8, ALPHA, CHANNELS};
use crate::pyramid::{downsample_box, upsample_nearest, Pyramid, PyramidLevel};
use crate::stats::StatImage;
use log::{debug, warn};
use nalgebra::Vector4;
use rand::Rng;
use std::time::Instant;

/// Decompose-once, resynthesize-many engine.
///
/// `base` holds the literal decomposition of the latest upload; `target`
/// holds only statistics (its arrays are scratch space for resynthesis).
#[derive(Clone, Debug)]
pub struct SynthEngine {
    options: SynthOptions,
    base: Pyramid,
    target: Pyramid,
    output: ImageRgbaF32,
}

impl SynthEngine {
    /// Engine at `resolution` with default target statistics.
    pub fn new(resolution: usize) -> Result<Self, SynthError> {
        Self::with_options(SynthOptions::new(resolution))
    }

    pub fn with_options(options: SynthOptions) -> Result<Self, SynthError> {
        let base = Pyramid::build_with_options(options.base_pyramid())?;
        let target = Pyramid::build_with_options(options.target_pyramid())?;
        let output = initial_output(&options);
        Ok(Self {
            options,
            base,
            target,
            output,
        })
    }

    pub fn options(&self) -> &SynthOptions {
        &self.options
    }

    pub fn resolution(&self) -> usize {
        self.options.resolution
    }

    pub fn level_count(&self) -> usize {
        self.target.len()
    }

    pub fn base(&self) -> &Pyramid {
        &self.base
    }

    pub fn target(&self) -> &Pyramid {
        &self.target
    }

    /// Current full-resolution output image.
    pub fn output(&self) -> &ImageRgbaF32 {
        &self.output
    }

    /// Switch the working resolution, rebuilding both pyramids and resetting
    /// the output. Nothing changes when the new resolution is rejected.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), SynthError> {
        let options = self.options.with_resolution(resolution);
        *self = Self::with_options(options)?;
        debug!("SynthEngine::set_resolution res={resolution}");
        Ok(())
    }

    /// Decompose a flat RGBA sample buffer of length `resolution² × 4`.
    pub fn decompose(&mut self, buffer: &[f32]) -> Result<(), SynthError> {
        self.decompose_with_diagnostics(buffer).map(|_| ())
    }

    /// Decompose a host byte buffer (interleaved RGBA, `resolution² × 4`).
    pub fn decompose_u8(&mut self, bytes: &[u8]) -> Result<(), SynthError> {
        let res = self.resolution();
        let view = ImageRgbaU8::from_bytes(res, res, bytes)?;
        self.decompose_image(&view.to_f32()).map(|_| ())
    }

    /// Decompose and return per-level statistics with timings.
    pub fn decompose_with_diagnostics(
        &mut self,
        buffer: &[f32],
    ) -> Result<DecompositionReport, SynthError> {
        let res = self.resolution();
        let image = ImageRgbaF32::from_flat(res, res, buffer)?;
        self.decompose_image(&image)
    }

    /// Decompose an image whose side equals the working resolution.
    ///
    /// All new arrays and statistics are computed before anything is
    /// committed, so a failure leaves the engine untouched. The output image
    /// is never modified.
    pub fn decompose_image(
        &mut self,
        image: &ImageRgbaF32,
    ) -> Result<DecompositionReport, SynthError> {
        let res = self.resolution();
        if image.w != res || image.h != res {
            return Err(SynthError::ShapeMismatch {
                expected: res * res * CHANNELS,
                actual: image.w * image.h * CHANNELS,
            });
        }
        debug!(
            "SynthEngine::decompose start res={} levels={}",
            res,
            self.base.len()
        );
        let total_start = Instant::now();

        let resolutions: Vec<usize> = self.base.levels.iter().map(|l| l.resolution).collect();

        let down_start = Instant::now();
        let colors = downsample_cascade(image, &resolutions)?;
        let down_ms = down_start.elapsed().as_secs_f64() * 1000.0;

        let resid_start = Instant::now();
        let levels = residual_cascade(colors)?;
        let resid_ms = resid_start.elapsed().as_secs_f64() * 1000.0;

        self.base.levels = levels;
        self.target.copy_stats_from(&self.base);

        let mut timing = TimingBreakdown::with_total(total_start.elapsed().as_secs_f64() * 1000.0);
        timing.push("downsample_cascade", down_ms);
        timing.push("residual_cascade", resid_ms);
        let report = DecompositionReport::from_pyramid(&self.base, timing);
        debug!(
            "SynthEngine::decompose done global_mean={:?} total_ms={:.3}",
            report.global_mean, report.timing.total_ms
        );
        Ok(report)
    }

    /// Resynthesize at detail `t ∈ [0, 1]`, returning the level index used.
    ///
    /// Values outside the range (or NaN) are clamped with a warning.
    pub fn resynthesize<R: Rng + ?Sized>(
        &mut self,
        t: f64,
        rng: &mut R,
    ) -> Result<usize, SynthError> {
        self.resynthesize_with_diagnostics(t, rng)
            .map(|report| report.level_index)
    }

    pub fn resynthesize_with_diagnostics<R: Rng + ?Sized>(
        &mut self,
        t: f64,
        rng: &mut R,
    ) -> Result<SynthesisReport, SynthError> {
        let start = Instant::now();
        let detail = clamp_detail(t);
        if detail != t {
            warn!("SynthEngine::resynthesize detail {t} outside [0, 1], clamped to {detail}");
        }
        let requested = level_index_for_detail(detail, self.target.len());
        let index = reconstruct_chain(&mut self.target, requested, rng)?;
        let level = &self.target.levels[index];
        let mut output = upsample_nearest(&level.color.array, self.resolution())?;
        output.fill_channel(ALPHA, OPAQUE);
        self.output = output;

        let report = SynthesisReport {
            requested_detail: t,
            detail,
            level_index: index,
            level_resolution: level.resolution,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "SynthEngine::resynthesize t={} level={} res={}",
            detail, index, report.level_resolution
        );
        Ok(report)
    }

    /// Output as row-major interleaved RGBA bytes, clipped to `[0, 255]`.
    pub fn flatten_output(&self) -> Vec<u8> {
        self.output.to_rgba_u8()
    }
}

fn initial_output(options: &SynthOptions) -> ImageRgbaF32 {
    let m = options.default_color_mean;
    ImageRgbaF32::filled(options.resolution, options.resolution, [m, m, m, OPAQUE])
}

/// Box-downsample `image` to every resolution in `resolutions` (coarsest
/// first), each level decimated from the next finer one.
fn downsample_cascade(
    image: &ImageRgbaF32,
    resolutions: &[usize],
) -> Result<Vec<ImageRgbaF32>, SynthError> {
    let mut colors: Vec<ImageRgbaF32> = Vec::with_capacity(resolutions.len());
    for &res in resolutions.iter().rev() {
        let next = downsample_box(colors.last().unwrap_or(image), res)?;
        colors.push(next);
    }
    colors.reverse();
    Ok(colors)
}

/// Turn coarsest-first colour arrays into levels with residuals and
/// statistics.
///
/// Every colour mean is the global (1×1) mean; the delta mean is the global
/// mean at level 0 and zero above it.
fn residual_cascade(colors: Vec<ImageRgbaF32>) -> Result<Vec<PyramidLevel>, SynthError> {
    let global = colors
        .first()
        .map(|c| c.get(0, 0))
        .ok_or(SynthError::InvalidResolution { resolution: 0 })?;
    let global_mean = Vector4::from(global);

    let zero = ImageRgbaF32::new(1, 1);
    let mut levels: Vec<PyramidLevel> = Vec::with_capacity(colors.len());
    for (n, color) in colors.into_iter().enumerate() {
        let resolution = color.w;
        let prev = levels.last().map_or(&zero, |l| &l.color.array);
        let prediction = upsample_nearest(prev, resolution)?;
        let delta_array = color.sub(&prediction)?;

        let mut color = StatImage::from_array(color);
        color.mean = global_mean;
        let mut delta = StatImage::from_array(delta_array);
        delta.mean = if n == 0 { global_mean } else { Vector4::zeros() };

        levels.push(PyramidLevel {
            resolution,
            color,
            delta,
        });
    }
    Ok(levels)
}
