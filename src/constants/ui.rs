//! UI, font and window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Label font size
pub const DEFAULT_FONT_SIZE: f32 = 50.0;
/// Label text color
pub const DEFAULT_FONT_COLOR: &str = "#000000";
/// Announcement font size
pub const DEFAULT_UPDATE_FONT_SIZE: f32 = 90.0;
/// Announcement color for the good tone
pub const DEFAULT_UPDATE_FONT_COLOR: &str = "#39d179";
/// Announcement outline color
pub const DEFAULT_UPDATE_STROKE_COLOR: &str = "#ffffff";
/// Announcement outline width
pub const DEFAULT_UPDATE_STROKE_WIDTH: f32 = 15.0;
/// Announcement color for the bad tone
pub const DEFAULT_BAD_COLOR: &str = "#ff0000";

/// Demo background (light, so the black default label reads)
pub const DEMO_BACKGROUND: [f32; 3] = [0.93, 0.92, 0.89];
/// Largest amount a demo click announces
pub const DEMO_MAX_CLICK_AMOUNT: i64 = 250;
/// Distance from the top of the window to the label center, in points
pub const DEMO_LABEL_TOP: f32 = 70.0;
