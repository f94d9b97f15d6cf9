use super::f32::{ImageRgbaF32, CHANNELS};
use crate::error::SynthError;

/// Borrowed interleaved 8-bit RGBA buffer as handed over by a host.
#[derive(Clone, Debug)]
pub struct ImageRgbaU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgbaU8<'a> {
    /// Wrap a tightly packed `w × h × 4` byte buffer.
    pub fn from_bytes(w: usize, h: usize, data: &'a [u8]) -> Result<Self, SynthError> {
        let expected = w * h * CHANNELS;
        if data.len() != expected {
            return Err(SynthError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w * CHANNELS,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = y * self.stride + x * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }

    /// Widen to an owned float image.
    pub fn to_f32(&self) -> ImageRgbaF32 {
        let mut out = ImageRgbaF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            for (x, c) in src.chunks_exact(CHANNELS).enumerate() {
                out.set(
                    x,
                    y,
                    [c[0] as f32, c[1] as f32, c[2] as f32, c[3] as f32],
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ImageRgbaU8;

    #[test]
    fn widen_preserves_samples() {
        let bytes = [1u8, 2, 3, 4, 250, 251, 252, 253];
        let view = ImageRgbaU8::from_bytes(2, 1, &bytes).unwrap();
        assert_eq!(view.get(1, 0), [250, 251, 252, 253]);
        let img = view.to_f32();
        assert_eq!(img.get(0, 0), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(img.get(1, 0), [250.0, 251.0, 252.0, 253.0]);
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(ImageRgbaU8::from_bytes(2, 2, &[0u8; 12]).is_err());
    }
}
