//! slowcore — shared library for slow computer applications

pub mod repaint;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod timer;

pub use repaint::RepaintController;
pub use storage::SettingsStore;
pub use theme::SlowTheme;
pub use timer::RepeatingTimer;
