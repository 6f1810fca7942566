//! Rendering seam between a label and its host.
//!
//! The label owns a [`LabelRenderer`] and pushes text and scale changes into
//! it. Hosts that draw in immediate mode (egui) can use [`TextLabel`], which
//! just remembers the latest values for the next paint.

use crate::announcer::AnnouncementId;

pub trait LabelRenderer {
    /// Replace the counter text
    fn set_text(&mut self, text: &str);

    /// Scale the counter text around its anchor
    fn set_scale(&mut self, _scale: f32) {}

    /// Free whatever the host allocated for an announcement
    fn release_announcement(&mut self, _id: AnnouncementId) {}
}

/// Retained text and scale for immediate-mode painters
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub scale: f32,
}

impl TextLabel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            scale: 1.0,
        }
    }
}

impl Default for TextLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelRenderer for TextLabel {
    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

impl<R: LabelRenderer + ?Sized> LabelRenderer for Box<R> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_scale(&mut self, scale: f32) {
        (**self).set_scale(scale);
    }

    fn release_announcement(&mut self, id: AnnouncementId) {
        (**self).release_announcement(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label_keeps_latest() {
        let mut label = TextLabel::new();
        label.set_text("10");
        label.set_text("11");
        label.set_scale(1.2);
        assert_eq!(label.text, "11");
        assert_eq!(label.scale, 1.2);
    }

    #[test]
    fn test_boxed_renderer_forwards() {
        let mut boxed: Box<dyn LabelRenderer> = Box::new(TextLabel::new());
        boxed.set_text("5");
        boxed.release_announcement(AnnouncementId(0));
    }
}
