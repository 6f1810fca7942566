//! Label configuration.
//!
//! Every option has a default, so an empty JSON object or
//! `LabelConfig::default()` gives a working label. Options are resolved once,
//! when the label is created.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::{LabelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// An opaque RGB color, written as `"#rrggbb"` in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || LabelError::InvalidArgument(format!("not a #rrggbb color: {:?}", s));
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse one of the built-in default colors
    fn builtin(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::rgb(0, 0, 0))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Text outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Text styling. The counter never looks inside; only the renderer does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub size: f32,
    pub color: Color,
    pub stroke: Option<Stroke>,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            color: Color::builtin(DEFAULT_FONT_COLOR),
            stroke: None,
        }
    }
}

impl FontStyle {
    /// Default style of the floating announcement text
    pub fn update_default() -> Self {
        Self {
            size: DEFAULT_UPDATE_FONT_SIZE,
            color: Color::builtin(DEFAULT_UPDATE_FONT_COLOR),
            stroke: Some(Stroke {
                color: Color::builtin(DEFAULT_UPDATE_STROKE_COLOR),
                width: DEFAULT_UPDATE_STROKE_WIDTH,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    /// Initial total
    pub value: i64,
    /// Style of the counter text
    pub font: FontStyle,
    /// Style of announcements; its color is the "good" color
    pub update_font: FontStyle,
    /// Announcement color for the "bad" tone
    pub bad_color: Color,
    /// Whether positive deltas are good news
    #[serde(alias = "positive")]
    pub positive_is_good: bool,
    #[serde(alias = "labelAnimate")]
    pub pulse_enabled: bool,
    /// Peak scale reached by the pulse
    #[serde(alias = "labelAnimateSize")]
    pub pulse_scale: f32,
    /// Duration of each pulse half, in milliseconds
    #[serde(alias = "labelAnimateSpeed")]
    pub pulse_speed: u64,
    #[serde(alias = "labelAnimateEasing")]
    pub pulse_easing: Easing,
    /// Announcement travel duration, in milliseconds
    #[serde(alias = "updateAnimateSpeed")]
    pub update_speed: u64,
    #[serde(alias = "updateAnimateEasing")]
    pub update_easing: Easing,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            value: 0,
            font: FontStyle::default(),
            update_font: FontStyle::update_default(),
            bad_color: Color::builtin(DEFAULT_BAD_COLOR),
            positive_is_good: true,
            pulse_enabled: true,
            pulse_scale: DEFAULT_PULSE_SCALE,
            pulse_speed: DEFAULT_PULSE_SPEED_MS,
            pulse_easing: Easing::Linear,
            update_speed: DEFAULT_UPDATE_SPEED_MS,
            update_easing: Easing::ExponentialIn,
        }
    }
}

impl LabelConfig {
    pub fn builder() -> LabelConfigBuilder {
        LabelConfigBuilder::default()
    }

    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LabelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pulse half duration in seconds
    pub fn pulse_duration(&self) -> f32 {
        self.pulse_speed as f32 / 1000.0
    }

    /// Announcement travel duration in seconds
    pub fn update_duration(&self) -> f32 {
        self.update_speed as f32 / 1000.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pulse_scale.is_finite() || self.pulse_scale <= 0.0 {
            return Err(LabelError::InvalidArgument(format!(
                "pulseScale must be a positive number, got {}",
                self.pulse_scale
            )));
        }
        for (name, style) in [("font", &self.font), ("updateFont", &self.update_font)] {
            if !style.size.is_finite() || style.size <= 0.0 {
                return Err(LabelError::InvalidArgument(format!(
                    "{}.size must be a positive number, got {}",
                    name, style.size
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`LabelConfig`]; unset options keep their defaults
#[derive(Debug, Clone, Default)]
pub struct LabelConfigBuilder {
    config: LabelConfig,
}

impl LabelConfigBuilder {
    pub fn value(mut self, value: i64) -> Self {
        self.config.value = value;
        self
    }

    pub fn font(mut self, font: FontStyle) -> Self {
        self.config.font = font;
        self
    }

    pub fn update_font(mut self, font: FontStyle) -> Self {
        self.config.update_font = font;
        self
    }

    pub fn bad_color(mut self, color: Color) -> Self {
        self.config.bad_color = color;
        self
    }

    pub fn positive_is_good(mut self, positive_is_good: bool) -> Self {
        self.config.positive_is_good = positive_is_good;
        self
    }

    pub fn pulse_enabled(mut self, enabled: bool) -> Self {
        self.config.pulse_enabled = enabled;
        self
    }

    pub fn pulse_scale(mut self, scale: f32) -> Self {
        self.config.pulse_scale = scale;
        self
    }

    pub fn pulse_speed(mut self, ms: u64) -> Self {
        self.config.pulse_speed = ms;
        self
    }

    pub fn pulse_easing(mut self, easing: Easing) -> Self {
        self.config.pulse_easing = easing;
        self
    }

    pub fn update_speed(mut self, ms: u64) -> Self {
        self.config.update_speed = ms;
        self
    }

    pub fn update_easing(mut self, easing: Easing) -> Self {
        self.config.update_easing = easing;
        self
    }

    pub fn build(self) -> Result<LabelConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabelConfig::default();
        assert_eq!(config.value, 0);
        assert!(config.positive_is_good);
        assert!(config.pulse_enabled);
        assert_eq!(config.pulse_scale, 1.5);
        assert_eq!(config.pulse_speed, 200);
        assert_eq!(config.update_speed, 800);
        assert_eq!(config.pulse_easing, Easing::Linear);
        assert_eq!(config.update_easing, Easing::ExponentialIn);
        assert_eq!(config.update_font.color, Color::rgb(0x39, 0xd1, 0x79));
        assert_eq!(config.bad_color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = LabelConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LabelConfig::default());
    }

    #[test]
    fn test_json_overrides() {
        let config = LabelConfig::from_json_str(
            r##"{
                "value": 100,
                "positive": false,
                "pulseEnabled": false,
                "updateSpeed": 400,
                "updateEasing": "quadratic_out",
                "updateFont": { "size": 40, "color": "#0000ff" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.value, 100);
        assert!(!config.positive_is_good);
        assert!(!config.pulse_enabled);
        assert_eq!(config.update_speed, 400);
        assert_eq!(config.update_easing, Easing::QuadraticOut);
        assert_eq!(config.update_font.size, 40.0);
        assert_eq!(config.update_font.color, Color::rgb(0, 0, 255));
        assert!(config.update_font.stroke.is_none());
        // Untouched keys keep their defaults
        assert_eq!(config.pulse_scale, 1.5);
    }

    #[test]
    fn test_json_accepts_animate_option_names() {
        let config = LabelConfig::from_json_str(
            r#"{
                "labelAnimate": false,
                "labelAnimateSize": 2.0,
                "labelAnimateSpeed": 150,
                "labelAnimateEasing": "sine_out",
                "updateAnimateSpeed": 600,
                "updateAnimateEasing": "cubic_in"
            }"#,
        )
        .unwrap();
        assert!(!config.pulse_enabled);
        assert_eq!(config.pulse_scale, 2.0);
        assert_eq!(config.pulse_speed, 150);
        assert_eq!(config.pulse_easing, Easing::SineOut);
        assert_eq!(config.update_speed, 600);
        assert_eq!(config.update_easing, Easing::CubicIn);
    }

    #[test]
    fn test_json_rejects_bad_color() {
        let err = LabelConfig::from_json_str(r#"{ "badColor": "red" }"#).unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }

    #[test]
    fn test_json_rejects_bad_pulse_scale() {
        let err = LabelConfig::from_json_str(r#"{ "pulseScale": -1.0 }"#).unwrap_err();
        assert!(matches!(err, LabelError::InvalidArgument(_)));
    }

    #[test]
    fn test_builder() {
        let config = LabelConfig::builder()
            .value(100)
            .positive_is_good(false)
            .pulse_speed(50)
            .update_speed(0)
            .build()
            .unwrap();
        assert_eq!(config.value, 100);
        assert!(!config.positive_is_good);
        assert_eq!(config.pulse_duration(), 0.05);
        assert_eq!(config.update_duration(), 0.0);
    }

    #[test]
    fn test_builder_validates() {
        assert!(LabelConfig::builder().pulse_scale(f32::NAN).build().is_err());
        let tiny = FontStyle { size: 0.0, ..FontStyle::default() };
        assert!(LabelConfig::builder().font(tiny).build().is_err());
    }

    #[test]
    fn test_color_round_trip_text() {
        let c = Color::parse("#39D179").unwrap();
        assert_eq!(c.to_string(), "#39d179");
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gg0000").is_err());
    }
}
