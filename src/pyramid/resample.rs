//! Resolution-changing primitives between pyramid levels.
//!
//! - `downsample_box`: replace each `k × k` block with its per-channel mean.
//! - `upsample_nearest`: replicate each pixel into a `k × k` block.
//!
//! Both operate on a square `target × target` output grid and reject targets
//! that do not tile the source exactly. Block sums accumulate in `f64`, so a
//! cascade of 2× decimations ends in the exact image mean for inputs whose
//! samples and block counts are representable.
use crate::error::SynthError;
use crate::image::{ImageRgbaF32, ImageView, ImageViewMut, CHANNELS};

/// Box-filter decimation of `image` to `target × target`.
pub fn downsample_box(image: &ImageRgbaF32, target: usize) -> Result<ImageRgbaF32, SynthError> {
    let (w, h) = (image.width(), image.height());
    if target == 0 || w % target != 0 || h % target != 0 {
        return Err(SynthError::NonDivisibleResolution { side: w, target });
    }
    let (bx, by) = (w / target, h / target);
    if bx == 1 && by == 1 {
        return Ok(image.clone());
    }
    let inv_count = 1.0 / (bx * by) as f64;

    let mut out = ImageRgbaF32::new(target, target);
    let mut acc = vec![[0.0f64; CHANNELS]; target];
    for ty in 0..target {
        acc.iter_mut().for_each(|a| *a = [0.0; CHANNELS]);
        for sy in ty * by..(ty + 1) * by {
            let src_row = image.row(sy);
            for (tx, block) in acc.iter_mut().enumerate() {
                for px in &src_row[tx * bx..(tx + 1) * bx] {
                    for c in 0..CHANNELS {
                        block[c] += px[c] as f64;
                    }
                }
            }
        }
        let dst_row = out.row_mut(ty);
        for (dst_px, block) in dst_row.iter_mut().zip(&acc) {
            *dst_px = (*block).map(|s| (s * inv_count) as f32);
        }
    }
    Ok(out)
}

/// Nearest-neighbour magnification of `image` to `target × target`.
pub fn upsample_nearest(image: &ImageRgbaF32, target: usize) -> Result<ImageRgbaF32, SynthError> {
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 || target % w != 0 || target % h != 0 {
        return Err(SynthError::NonMultipleResolution { side: w, target });
    }
    let (fx, fy) = (target / w, target / h);
    if fx == 1 && fy == 1 {
        return Ok(image.clone());
    }

    let mut out = ImageRgbaF32::new(target, target);
    for (ty, dst_row) in out.rows_mut().enumerate() {
        let src_row = image.row(ty / fy);
        for (tx, dst_px) in dst_row.iter_mut().enumerate() {
            *dst_px = src_row[tx / fx];
        }
    }
    Ok(out)
}
