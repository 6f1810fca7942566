//! Score label and announcement rendering.

use super::style::to_color32;
use crate::config::FontStyle;
use crate::label::ScoreLabel;
use crate::render::{LabelRenderer, TextLabel};
use egui::{Align2, Color32, FontId, Id, LayerId, Order, Painter, Pos2};

/// Outline offsets, as fractions of the stroke width
const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

/// Draw text with the style's outline, if any.
///
/// egui has no text outline, so the outline is approximated with offset
/// copies drawn underneath.
fn draw_styled_text(
    painter: &Painter,
    pos: Pos2,
    anchor: Align2,
    text: &str,
    style: &FontStyle,
    size: f32,
    fill: Color32,
    alpha: f32,
) {
    let font_id = FontId::proportional(size);
    if let Some(stroke) = style.stroke {
        let reach = stroke.width * 0.25 * (size / style.size);
        let outline = to_color32(stroke.color, alpha);
        for (dx, dy) in OUTLINE_DIRECTIONS {
            painter.text(
                pos + egui::vec2(dx * reach, dy * reach),
                anchor,
                text,
                font_id.clone(),
                outline,
            );
        }
    }
    painter.text(pos, anchor, text, font_id, fill);
}

/// Render the counter text at the label's position, scaled by the pulse
pub fn draw_score_label(ctx: &egui::Context, label: &ScoreLabel<TextLabel>) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("score_label")));

    let text = label.renderer();
    let style = &label.config().font;
    let pos = label.position();

    draw_styled_text(
        &painter,
        Pos2::new(pos.x, pos.y),
        Align2::CENTER_CENTER,
        &text.text,
        style,
        style.size * text.scale,
        to_color32(style.color, 1.0),
        1.0,
    );
}

/// Render every announcement travelling toward the label
pub fn draw_announcements<R: LabelRenderer>(ctx: &egui::Context, label: &ScoreLabel<R>) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("announcements")));
    let style = &label.config().update_font;

    for announcement in label.announcements() {
        let pos = announcement.position();
        let alpha = announcement.alpha();
        let fill = to_color32(label.tone_color(announcement.tone), alpha);

        draw_styled_text(
            &painter,
            Pos2::new(pos.x, pos.y),
            Align2::CENTER_TOP,
            &announcement.message,
            style,
            style.size,
            fill,
            alpha,
        );
    }
}
