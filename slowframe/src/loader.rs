//! Image loader for slowFrame
//!
//! Decodes a picture into an RGBA buffer ready for upload as an egui
//! texture. Pictures bigger than the renderer's texture limit are shrunk
//! first; everything else is uploaded at full resolution and scaled by
//! the display.

use egui::ColorImage;
use image::{imageops::FilterType, DynamicImage};
use std::path::Path;
use thiserror::Error;

/// Upper bound on the texture side, whatever the renderer reports.
pub const MAX_TEXTURE_SIZE: u32 = 16384;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode `path` into a texture-ready image no wider or taller than
/// `max_side` pixels.
pub fn load_color_image(path: &Path, max_side: usize) -> Result<ColorImage, LoadError> {
    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX).clamp(1, MAX_TEXTURE_SIZE);
    let rgba = fit_texture(decoded, max_side).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn fit_texture(image: DynamicImage, max_side: u32) -> DynamicImage {
    let (w, h) = (image.width(), image.height());
    let (fit_w, fit_h) = fit_dimensions(w, h, max_side, max_side);
    if fit_w < w || fit_h < h {
        image.resize_exact(fit_w, fit_h, FilterType::Triangle)
    } else {
        image
    }
}

/// Calculate dimensions that fit within max_w × max_h while preserving aspect ratio.
/// If the image is already smaller than the max, return original dimensions.
pub fn fit_dimensions(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w <= max_w && h <= max_h {
        return (w, h);
    }

    let scale_x = max_w as f64 / w as f64;
    let scale_y = max_h as f64 / h as f64;
    let scale = scale_x.min(scale_y);

    let new_w = (w as f64 * scale).round() as u32;
    let new_h = (h as f64 * scale).round() as u32;

    (new_w.max(1), new_h.max(1))
}
