//! Event queue constants.

/// Events a label keeps for the host before dropping the oldest
pub const MAX_QUEUED_EVENTS: usize = 1024;
