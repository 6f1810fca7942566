//! Rolling score label.
//!
//! A numeric score that never jumps: each change is announced by a floating
//! delta that flies from where it happened to the counter, and the counter
//! then rolls toward the new total over several frames.
//!
//! ```no_run
//! use glam::Vec2;
//! use rolling_score::{LabelConfig, ScoreLabel};
//!
//! # fn main() -> rolling_score::Result<()> {
//! let config = LabelConfig::builder().value(100).build()?;
//! let mut label = ScoreLabel::new(config, Vec2::new(640.0, 40.0))?;
//!
//! label.add_value(50, Vec2::new(200.0, 400.0))?;
//! assert_eq!(label.get_value()?, 150);
//!
//! // Once per frame
//! label.update(1.0 / 60.0)?;
//! # Ok(())
//! # }
//! ```

pub mod announcer;
pub mod config;
pub mod constants;
pub mod counter;
pub mod easing;
pub mod error;
pub mod events;
pub mod label;
pub mod render;
pub mod tween;
pub mod ui;

pub use announcer::{Announcement, AnnouncementId, Tone};
pub use config::{Color, FontStyle, LabelConfig, LabelConfigBuilder, Stroke};
pub use counter::CounterState;
pub use easing::Easing;
pub use error::{LabelError, Result};
pub use events::LabelEvent;
pub use label::ScoreLabel;
pub use render::{LabelRenderer, TextLabel};
