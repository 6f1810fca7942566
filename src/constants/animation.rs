//! Animation-related constants.

/// Peak scale of the idle pulse
pub const DEFAULT_PULSE_SCALE: f32 = 1.5;
/// Duration of each half of the pulse, in milliseconds
pub const DEFAULT_PULSE_SPEED_MS: u64 = 200;
/// Travel duration of an announcement, in milliseconds
pub const DEFAULT_UPDATE_SPEED_MS: u64 = 800;
/// Maximum delta time for animations (prevents snapping after long frames)
pub const MAX_ANIMATION_DT: f32 = 0.05; // 50ms cap (~20 FPS minimum)
