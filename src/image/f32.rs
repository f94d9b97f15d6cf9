//! Owned RGBA f32 image in row-major layout (stride == width).
//!
//! Each pixel is `[r, g, b, a]` with samples nominally in `[0, 255]`.
//! Intermediate pyramid arrays (residuals, noisy reconstructions) may leave
//! that range; clipping only happens when an image is flattened to bytes.
use crate::error::SynthError;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the alpha channel inside a pixel.
pub const ALPHA: usize = 3;

/// One RGBA sample.
pub type Rgba = [f32; CHANNELS];

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgbaF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl ImageRgbaF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0.0; CHANNELS])
    }

    /// Construct a buffer with every pixel set to `px`.
    pub fn filled(w: usize, h: usize, px: Rgba) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![px; w * h],
        }
    }

    /// Reshape a flat interleaved RGBA sequence into a `w × h` image.
    pub fn from_flat(w: usize, h: usize, samples: &[f32]) -> Result<Self, SynthError> {
        let expected = w * h * CHANNELS;
        if samples.len() != expected {
            return Err(SynthError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        let data = samples
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Side length when the image is square.
    pub fn side(&self) -> Option<usize> {
        (self.w == self.h).then_some(self.w)
    }

    /// Overwrite one channel of every pixel with `value`.
    pub fn fill_channel(&mut self, channel: usize, value: f32) {
        for px in &mut self.data {
            px[channel] = value;
        }
    }

    /// Element-wise `self - other`; both images must share dimensions.
    pub fn sub(&self, other: &ImageRgbaF32) -> Result<ImageRgbaF32, SynthError> {
        if self.w != other.w || self.h != other.h {
            return Err(SynthError::ShapeMismatch {
                expected: self.w * self.h * CHANNELS,
                actual: other.w * other.h * CHANNELS,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]])
            .collect();
        Ok(ImageRgbaF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data,
        })
    }

    /// Flatten row-major into interleaved samples.
    pub fn to_flat(&self) -> Vec<f32> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }

    /// Flatten row-major, clip to `[0, 255]` and truncate to bytes.
    pub fn to_rgba_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|px| px.iter().map(|&v| v.clamp(0.0, 255.0) as u8))
            .collect()
    }
}

impl crate::image::traits::ImageView for ImageRgbaF32 {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageRgbaF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [Rgba]> {
        if self.stride == self.w {
            Some(&mut self.data[..self.w * self.h])
        } else {
            None
        }
    }
}
