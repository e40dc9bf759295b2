//! slowFrame application
//!
//! A picture frame: full screen, no chrome, a new picture every five
//! seconds. All work happens on the UI thread, including the folder
//! prompt on first run.

use crate::slideshow::Slideshow;
use crate::source::{resolve_image_dir, scan_images, NativePicker};
use crate::surface::{DisplaySurface, SurfaceDisplay};
use egui::Context;
use log::{debug, info, trace};
use slowcore::repaint::{RepaintController, RepaintReason};
use slowcore::storage::{config_dir, home_dir, JsonSettings};
use slowcore::theme::SlowTheme;
use std::time::Instant;

pub const APP_NAME: &str = "slowframe";

pub struct SlowFrameApp {
    repaint: RepaintController,
    slideshow: Slideshow,
    surface: DisplaySurface,
    theme: SlowTheme,
}

impl SlowFrameApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut settings = JsonSettings::open(config_dir(APP_NAME).join("settings.json"));
        let dir = resolve_image_dir(&mut settings, &mut NativePicker, home_dir().as_deref());
        info!("image directory: {:?}", dir);

        Self::with_images(&cc.egui_ctx, scan_images(&dir))
    }

    fn with_images(ctx: &Context, images: Vec<std::path::PathBuf>) -> Self {
        let mut slideshow = Slideshow::new(images);
        info!("{} images to show", slideshow.images().len());
        let mut surface = DisplaySurface::new(ctx.screen_rect().size());
        slideshow.start(Instant::now(), &mut SurfaceDisplay::new(ctx, &mut surface));
        if !slideshow.is_running() {
            info!("nothing to show");
        }

        Self {
            repaint: RepaintController::new(),
            slideshow,
            surface,
            theme: SlowTheme::default(),
        }
    }

    /// One frame: go full screen on the first, run a due tick, fit the
    /// surface to the panel, paint, and schedule the next wake-up.
    fn run_frame(&mut self, ctx: &Context) {
        self.repaint.begin_frame(ctx);
        trace!("frame {} ({:?})", self.repaint.frame(), self.repaint.reason());

        if self.repaint.reason() == RepaintReason::Init {
            // Full screen whether or not there is anything to show
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        }

        self.slideshow
            .poll(Instant::now(), &mut SurfaceDisplay::new(ctx, &mut self.surface));

        egui::CentralPanel::default()
            .frame(self.theme.panel_frame())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                if self.surface.resize(rect.size()) {
                    debug!("surface resized to {:?}", self.surface.size());
                }
                self.surface.paint(ui, rect.min);
            });

        self.repaint
            .end_frame(ctx, self.slideshow.time_until_next(Instant::now()));
    }
}

impl eframe::App for SlowFrameApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_stays_blank() {
        let ctx = Context::default();
        let app = SlowFrameApp::with_images(&ctx, Vec::new());
        assert!(!app.slideshow.is_running());
        assert!(!app.surface.has_image());
    }

    fn window(width: f32, height: f32) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, height),
            )),
            ..Default::default()
        }
    }

    fn asked_for_fullscreen(output: &egui::FullOutput) -> bool {
        output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(false, |v| {
                v.commands.contains(&egui::ViewportCommand::Fullscreen(true))
            })
    }

    #[test]
    fn test_fullscreen_on_first_frame_only() {
        let ctx = Context::default();
        let mut app = SlowFrameApp::with_images(&ctx, Vec::new());

        let first = ctx.run(window(800.0, 400.0), |ctx| app.run_frame(ctx));
        assert!(asked_for_fullscreen(&first));

        let second = ctx.run(window(800.0, 400.0), |ctx| app.run_frame(ctx));
        assert!(!asked_for_fullscreen(&second));
    }

    #[test]
    fn test_surface_follows_window() {
        let ctx = Context::default();
        let mut app = SlowFrameApp::with_images(&ctx, Vec::new());

        ctx.run(window(1024.0, 600.0), |ctx| app.run_frame(ctx));
        assert_eq!(app.surface.size(), egui::vec2(1024.0, 600.0));

        ctx.run(window(1920.0, 1080.0), |ctx| app.run_frame(ctx));
        assert_eq!(app.surface.size(), egui::vec2(1920.0, 1080.0));
    }

    #[test]
    fn test_frames_do_not_tick_early() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for name in ["a.png", "b.png"] {
            let path = dir.path().join(name);
            image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]))
                .save(&path)
                .unwrap();
            paths.push(path);
        }

        let ctx = Context::default();
        let mut app = SlowFrameApp::with_images(&ctx, paths);
        assert_eq!(app.slideshow.current_index(), 1);

        ctx.run(window(800.0, 400.0), |ctx| app.run_frame(ctx));
        assert_eq!(app.slideshow.current_index(), 1);
        assert!(app.surface.has_image());
    }

    #[test]
    fn test_first_picture_shown_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("only.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();

        let ctx = Context::default();
        let app = SlowFrameApp::with_images(&ctx, vec![path]);
        assert!(app.slideshow.is_running());
        assert!(app.surface.has_image());
        assert_eq!(app.slideshow.current_index(), 0);
    }
}
