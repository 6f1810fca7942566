//! Demo help panel.

use super::style::{self, colors};
use crate::label::ScoreLabel;
use crate::render::LabelRenderer;

/// Controls listed in the help panel
const CONTROLS: [(&str, &str); 6] = [
    ("Left click", "add points"),
    ("Right click", "lose points"),
    ("M", "double"),
    ("D", "halve"),
    ("R", "reset"),
    ("Esc", "quit"),
];

/// Render the help panel with the true and displayed values
pub fn draw_help<R: LabelRenderer>(ctx: &egui::Context, label: &ScoreLabel<R>) {
    egui::Area::new(egui::Id::new("help"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .show(ctx, |ui| {
            style::panel_frame().show(ui, |ui| {
                for (key, action) in CONTROLS {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(key).monospace().strong());
                        ui.label(egui::RichText::new(action).color(colors::TEXT_MUTED));
                    });
                }
                ui.separator();

                let value = label.get_value().unwrap_or_default();
                ui.label(egui::RichText::new(format!("value      {}", value)).monospace());
                ui.label(
                    egui::RichText::new(format!("displayed  {}", label.displayed_value()))
                        .monospace(),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "rolling    {}  in flight {}",
                        label.pending(),
                        label.in_flight()
                    ))
                    .monospace()
                    .color(colors::TEXT_MUTED),
                );
            });
        });
}
