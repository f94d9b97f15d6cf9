//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. and resample it to a square
//!   working resolution.
//! - `save_rgba_f32`: write an `ImageRgbaF32` to an RGBA PNG.
//! - `save_rgba_u8`: write a flat RGBA byte buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::f32::{ImageRgbaF32, CHANNELS};
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as RGBA, resized to `resolution × resolution`.
///
/// Non-square inputs are stretched; aspect handling is the caller's concern.
pub fn load_rgba_image(path: &Path, resolution: usize) -> Result<ImageRgbaF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .resize_exact(resolution as u32, resolution as u32, FilterType::Triangle)
        .into_rgba8();
    let samples: Vec<f32> = img.into_raw().into_iter().map(f32::from).collect();
    ImageRgbaF32::from_flat(resolution, resolution, &samples)
        .map_err(|e| format!("Failed to convert {}: {e}", path.display()))
}

/// Save a float image to an RGBA PNG, clamping values in [0, 255].
pub fn save_rgba_f32(image: &ImageRgbaF32, path: &Path) -> Result<(), String> {
    save_rgba_u8(&image.to_rgba_u8(), image.w, image.h, path)
}

/// Save a flat interleaved RGBA byte buffer to a PNG.
pub fn save_rgba_u8(bytes: &[u8], width: usize, height: usize, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    if bytes.len() != width * height * CHANNELS {
        return Err(format!(
            "Buffer for {} holds {} bytes, expected {}",
            path.display(),
            bytes.len(),
            width * height * CHANNELS
        ));
    }
    let image: RgbaImage =
        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width as u32, height as u32, bytes.to_vec())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
