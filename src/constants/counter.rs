//! Drain rule constants.

/// Fraction of the pending buffer revealed per frame is `1 / DRAIN_DIVISOR`
pub const DRAIN_DIVISOR: i128 = 10;
/// Smallest magnitude drained on a frame while the buffer is non-zero
pub const MIN_DRAIN_STEP: i128 = 1;
