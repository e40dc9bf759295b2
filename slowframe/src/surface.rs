//! The display surface: one texture stretched over the whole window.

use crate::loader;
use crate::slideshow::Display;
use egui::{Color32, ColorImage, Context, Rect, TextureHandle, TextureOptions, Vec2};
use log::warn;
use slowcore::safety::catch_or;
use slowcore::theme::SlowColors;
use std::path::Path;

pub struct DisplaySurface {
    /// Bounds of the surface; always the window's, never aspect-corrected
    size: Vec2,
    texture: Option<TextureHandle>,
}

impl DisplaySurface {
    pub fn new(size: Vec2) -> Self {
        Self { size, texture: None }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn has_image(&self) -> bool {
        self.texture.is_some()
    }

    /// Pixel size of the uploaded picture, if any.
    pub fn texture_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|t| t.size())
    }

    /// Match the surface to new window bounds. The loaded picture is kept
    /// and rescaled when painted. Returns whether the size changed.
    pub fn resize(&mut self, size: Vec2) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    /// Replace the picture, or blank the surface with `None`.
    pub fn set_image(&mut self, ctx: &Context, image: Option<ColorImage>) {
        let Some(image) = image else {
            self.texture = None;
            return;
        };
        if let Some(texture) = self.texture.as_mut() {
            texture.set(image, TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("slowframe_image", image, TextureOptions::LINEAR));
        }
    }

    /// Paint at `origin`: black, then the picture stretched to fill.
    pub fn paint(&self, ui: &egui::Ui, origin: egui::Pos2) {
        let rect = Rect::from_min_size(origin, self.size);
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, SlowColors::BLACK);
        if let Some(ref tex) = self.texture {
            painter.image(
                tex.id(),
                rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}

/// Shows slideshow pictures on a [`DisplaySurface`].
pub struct SurfaceDisplay<'a> {
    ctx: &'a Context,
    surface: &'a mut DisplaySurface,
}

impl<'a> SurfaceDisplay<'a> {
    pub fn new(ctx: &'a Context, surface: &'a mut DisplaySurface) -> Self {
        Self { ctx, surface }
    }
}

impl Display for SurfaceDisplay<'_> {
    /// A picture that fails to decode blanks the surface until the next tick.
    /// Pictures are shrunk to the renderer's texture limit; the painter
    /// refuses anything larger.
    fn show_image(&mut self, path: &Path) {
        let max_side = self.ctx.input(|i| i.max_texture_side);
        let image = catch_or(None, || match loader::load_color_image(path, max_side) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("could not load {}: {}", path.display(), e);
                None
            }
        });
        self.surface.set_image(self.ctx, image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_is_exact() {
        let mut surface = DisplaySurface::new(Vec2::new(800.0, 400.0));
        assert!(surface.resize(Vec2::new(1920.0, 1080.0)));
        assert_eq!(surface.size(), Vec2::new(1920.0, 1080.0));

        // Odd aspect ratios are taken as-is
        assert!(surface.resize(Vec2::new(333.0, 1201.0)));
        assert_eq!(surface.size(), Vec2::new(333.0, 1201.0));

        assert!(!surface.resize(Vec2::new(333.0, 1201.0)));
    }

    #[test]
    fn test_resize_keeps_picture() {
        let ctx = Context::default();
        let mut surface = DisplaySurface::new(Vec2::new(800.0, 400.0));
        surface.set_image(&ctx, Some(ColorImage::new([2, 2], Color32::RED)));
        surface.resize(Vec2::new(1024.0, 768.0));
        assert!(surface.has_image());
    }

    #[test]
    fn test_set_and_clear_image() {
        let ctx = Context::default();
        let mut surface = DisplaySurface::new(Vec2::new(800.0, 400.0));
        assert!(!surface.has_image());

        surface.set_image(&ctx, Some(ColorImage::new([2, 2], Color32::RED)));
        assert!(surface.has_image());
        surface.set_image(&ctx, Some(ColorImage::new([4, 1], Color32::BLUE)));
        assert!(surface.has_image());

        surface.set_image(&ctx, None);
        assert!(!surface.has_image());
    }

    #[test]
    fn test_texture_fits_renderer_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panorama.png");
        image::RgbaImage::from_pixel(4000, 2, image::Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let ctx = Context::default();
        let limit = ctx.input(|i| i.max_texture_side);
        assert!(limit < 4000);

        let mut surface = DisplaySurface::new(Vec2::new(800.0, 400.0));
        SurfaceDisplay::new(&ctx, &mut surface).show_image(&path);
        let [w, h] = surface.texture_size().unwrap();
        assert!(w <= limit && h <= limit);
        assert_eq!(w, limit);
    }

    #[test]
    fn test_corrupt_file_blanks_surface() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 255, 255]))
            .save(&good)
            .unwrap();
        let bad = dir.path().join("bad.jpg");
        std::fs::write(&bad, b"garbage").unwrap();

        let ctx = Context::default();
        let mut surface = DisplaySurface::new(Vec2::new(800.0, 400.0));

        SurfaceDisplay::new(&ctx, &mut surface).show_image(&good);
        assert!(surface.has_image());
        SurfaceDisplay::new(&ctx, &mut surface).show_image(&bad);
        assert!(!surface.has_image());
    }
}
