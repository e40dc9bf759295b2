//! slowFrame — a full-screen picture frame for the Slow Computer

mod app;
mod loader;
mod slideshow;
mod source;
mod surface;

use app::SlowFrameApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 400.0])
            .with_min_inner_size([800.0, 400.0])
            .with_fullscreen(true)
            .with_title("slowFrame"),
        ..Default::default()
    };

    eframe::run_native(
        app::APP_NAME,
        options,
        Box::new(|cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowFrameApp::new(cc))
        }),
    )
}
