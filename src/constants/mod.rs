//! Label constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod animation;
mod counter;
mod events;
mod ui;

pub use animation::*;
pub use counter::*;
pub use events::*;
pub use ui::*;
