//! Channel-wise statistics and the statistical image unit.
//!
//! A [`StatImage`] pairs a pixel array with a per-channel mean and standard
//! deviation. The statistics are only guaranteed to describe the array right
//! after [`StatImage::from_array`] or [`StatImage::derive`]; the synthesis
//! engine also stores defaulted or copied-in statistics that are decoupled
//! from whatever array the unit currently holds.
//!
//! Reductions accumulate in `f64` and use the population standard deviation
//! (divide by the pixel count).
use crate::image::{ImageRgbaF32, ImageView, CHANNELS};
use nalgebra::Vector4;

/// Per-channel mean over both spatial axes.
pub fn channel_mean<I>(image: &I) -> Vector4<f32>
where
    I: ImageView<Pixel = [f32; CHANNELS]>,
{
    channel_moments(image).0
}

/// Per-channel population standard deviation over both spatial axes.
pub fn channel_std<I>(image: &I) -> Vector4<f32>
where
    I: ImageView<Pixel = [f32; CHANNELS]>,
{
    channel_moments(image).1
}

/// Per-channel `(mean, std)` computed with two passes in `f64`.
pub fn channel_moments<I>(image: &I) -> (Vector4<f32>, Vector4<f32>)
where
    I: ImageView<Pixel = [f32; CHANNELS]>,
{
    let n = image.pixel_count();
    if n == 0 {
        return (Vector4::zeros(), Vector4::zeros());
    }
    let inv_n = 1.0 / n as f64;

    let mut sum = [0.0f64; CHANNELS];
    for row in image.rows() {
        for px in row {
            for c in 0..CHANNELS {
                sum[c] += px[c] as f64;
            }
        }
    }
    let mean = sum.map(|s| s * inv_n);

    let mut sq = [0.0f64; CHANNELS];
    for row in image.rows() {
        for px in row {
            for c in 0..CHANNELS {
                let d = px[c] as f64 - mean[c];
                sq[c] += d * d;
            }
        }
    }

    let mean_v = Vector4::from_fn(|c, _| mean[c] as f32);
    let std_v = Vector4::from_fn(|c, _| (sq[c] * inv_n).sqrt() as f32);
    (mean_v, std_v)
}

/// Pixel array with per-channel mean/std summaries.
#[derive(Clone, Debug, PartialEq)]
pub struct StatImage {
    pub array: ImageRgbaF32,
    pub mean: Vector4<f32>,
    pub std: Vector4<f32>,
}

impl StatImage {
    /// Take ownership of `array` and derive its statistics.
    pub fn from_array(array: ImageRgbaF32) -> Self {
        let (mean, std) = channel_moments(&array);
        Self { array, mean, std }
    }

    /// Zero-filled `resolution × resolution` unit with zero statistics.
    pub fn zeros(resolution: usize) -> Self {
        Self {
            array: ImageRgbaF32::new(resolution, resolution),
            mean: Vector4::zeros(),
            std: Vector4::zeros(),
        }
    }

    /// Recompute `mean`/`std` from the current array.
    pub fn derive(&mut self) {
        let (mean, std) = channel_moments(&self.array);
        self.mean = mean;
        self.std = std;
    }

    /// Copy the statistics (not the array) of `other` into `self`.
    pub fn copy_stats_from(&mut self, other: &StatImage) {
        self.mean = other.mean;
        self.std = other.std;
    }

    /// Side length of the held array.
    pub fn resolution(&self) -> usize {
        self.array.w
    }
}
