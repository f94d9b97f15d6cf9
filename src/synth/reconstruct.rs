//! Stochastic reconstruction through a statistics-only pyramid.
//!
//! Level 0 is the broadcast of its stored colour mean. Every finer level is
//! the nearest-neighbour magnification of the level below plus independent
//! zero-mean Gaussian noise whose per-channel std is the level's delta std.
//! Alpha is pinned to 255 at every level.
//!
//! The chain is always rebuilt from level 0, so results never depend on
//! arrays left behind by an earlier call.
use crate::error::SynthError;
use crate::image::{ImageRgbaF32, ALPHA, CHANNELS};
use crate::pyramid::{upsample_nearest, Pyramid};
use log::trace;
use nalgebra::Vector4;
use rand::Rng;
use rand_distr::StandardNormal;

/// Alpha value written into every reconstructed array.
pub const OPAQUE: f32 = 255.0;

/// Rebuild the colour arrays of levels `0..=index` of `target`.
///
/// `index` is clamped to the last level. Returns the index actually
/// reconstructed; that level's `color.array` holds the result.
pub fn reconstruct_chain<R: Rng + ?Sized>(
    target: &mut Pyramid,
    index: usize,
    rng: &mut R,
) -> Result<usize, SynthError> {
    let last = target
        .len()
        .checked_sub(1)
        .ok_or(SynthError::InvalidResolution { resolution: 0 })?;
    let index = index.min(last);

    let base = &mut target.levels[0];
    base.color.array = broadcast_mean(&base.color.mean);

    for n in 1..=index {
        let (lower, upper) = target.levels.split_at_mut(n);
        let prev = &lower[n - 1].color.array;
        let level = &mut upper[0];
        let mut array = upsample_nearest(prev, level.resolution)?;
        add_gaussian_noise(&mut array, &level.delta.std, rng);
        array.fill_channel(ALPHA, OPAQUE);
        level.color.array = array;
        trace!(
            "reconstruct level={} res={} delta_std={:?}",
            n,
            level.resolution,
            level.delta.std.as_slice()
        );
    }

    Ok(index)
}

/// 1×1 image holding `mean`, with alpha forced opaque.
pub fn broadcast_mean(mean: &Vector4<f32>) -> ImageRgbaF32 {
    let mut px = [mean.x, mean.y, mean.z, mean.w];
    px[ALPHA] = OPAQUE;
    ImageRgbaF32::filled(1, 1, px)
}

/// Add `N(0, std[c]²)` to every colour channel of every pixel. Alpha is
/// skipped since it is overwritten anyway.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    image: &mut ImageRgbaF32,
    std: &Vector4<f32>,
    rng: &mut R,
) {
    for px in &mut image.data {
        for c in (0..CHANNELS).filter(|&c| c != ALPHA) {
            let sigma = std[c];
            if sigma == 0.0 {
                continue;
            }
            let z: f32 = rng.sample(StandardNormal);
            px[c] += sigma * z;
        }
    }
}
