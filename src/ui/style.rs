//! Demo styling and color conversion.

use crate::config::Color;
use egui::{Color32, Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Demo color palette
pub mod colors {
    use egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgb(250, 248, 242);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(170, 160, 145);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 36, 32);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 112, 100);
}

/// Border width for panels
pub const BORDER_WIDTH: f32 = 1.0;

/// Convert a configured color to egui with the given opacity (0.0 to 1.0)
pub fn to_color32(color: Color, alpha: f32) -> Color32 {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, (alpha * 255.0).round() as u8)
}

/// Flat panel frame with a hard border
pub fn panel_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(8.0))
}

/// Light style so the default black label reads against the background
pub fn demo_style() -> Style {
    let mut style = Style::default();
    let mut visuals = Visuals::light();
    visuals.window_rounding = Rounding::ZERO;
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);
    style.visuals = visuals;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_alpha() {
        let c = Color::rgb(255, 0, 0);
        assert_eq!(to_color32(c, 1.0), Color32::from_rgba_unmultiplied(255, 0, 0, 255));
        assert_eq!(to_color32(c, 0.0).a(), 0);
        assert_eq!(to_color32(c, 2.0).a(), 255);
        assert_eq!(to_color32(c, f32::NAN).a(), 0);
    }
}
