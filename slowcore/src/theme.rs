//! Slow Computer theme — picture frame variant
//!
//! A frame has no chrome: everything that is not a picture is black.

use egui::{Color32, Rounding, Stroke, Visuals};

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub background: Color32,
    pub foreground: Color32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            background: SlowColors::BLACK,
            foreground: SlowColors::WHITE,
        }
    }
}

impl SlowTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.faint_bg_color = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::NONE;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;
        visuals.override_text_color = Some(self.foreground);

        visuals
    }

    /// Panel frame: background fill, no margin, no outline
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none().fill(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        let visuals = SlowTheme::default().visuals();
        assert_eq!(visuals.panel_fill, SlowColors::BLACK);
        assert_eq!(visuals.window_fill, SlowColors::BLACK);
    }

    #[test]
    fn test_panel_frame_fill() {
        let theme = SlowTheme::default();
        assert_eq!(theme.panel_frame().fill, SlowColors::BLACK);
    }
}
