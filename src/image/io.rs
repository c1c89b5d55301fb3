//! I/O helpers for color input, grayscale output and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into planar RGB f32 in [0, 1].
//! - `save_normalized_f32`: write an `ImageF32` to a grayscale PNG, min–max
//!   normalized (gabor kernels and opponency planes carry negative values).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageRgbF32};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to planar RGB f32 in [0, 1].
pub fn load_rgb_image(path: &Path) -> Result<ImageRgbF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb32f();
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(format!("Image {} has no pixels", path.display()));
    }

    let mut r = ImageF32::new(width, height);
    let mut g = ImageF32::new(width, height);
    let mut b = ImageF32::new(width, height);
    for (i, px) in img.pixels().enumerate() {
        r.data[i] = px.0[0];
        g.data[i] = px.0[1];
        b.data[i] = px.0[2];
    }
    Ok(ImageRgbF32::from_planes(r, g, b))
}

/// Save a float plane to a grayscale PNG, mapping [min, max] onto [0, 255].
///
/// A constant plane writes as all-black rather than failing.
pub fn save_normalized_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let lo = image
        .data
        .iter()
        .copied()
        .fold(f32::INFINITY, f32::min);
    let hi = image.peak();
    let span = hi - lo;

    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = if span > 0.0 {
                ((px - lo) / span * 255.0).clamp(0.0, 255.0)
            } else {
                0.0
            };
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
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
