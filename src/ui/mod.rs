//! UI rendering using egui.
//!
//! Paints the score label, its travelling announcements, and the demo's help
//! panel. Positions are egui points.

mod hud;
mod score;
pub mod style;

pub use hud::*;
pub use score::*;
