//! Buffered counter state.
//!
//! The counter keeps three numbers: the committed value that is currently on
//! screen, a pending buffer that is revealed a little every frame, and an
//! in-flight buffer holding amounts whose announcements are still travelling.
//! Their sum is the true value at every instant.
//!
//! The true value is an `i64` and every change to it is checked. The buffers
//! are `i128`: announcements of opposite sign can arrive in any order, so the
//! display may pass beyond `i64` on its way to a value that is in range.

use crate::constants::{DRAIN_DIVISOR, MIN_DRAIN_STEP};
use crate::error::{LabelError, Result};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    committed: i128,
    pending: i128,
    in_flight: i128,
    display_text: String,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        let mut counter = Self {
            committed: 0,
            pending: 0,
            in_flight: 0,
            display_text: String::new(),
        };
        counter.set_value(value);
        counter
    }

    /// The authoritative value, including everything still animating
    pub fn value(&self) -> i64 {
        // In range: every change to the sum goes through `checked_value`
        let total = self.total().clamp(i64::MIN.into(), i64::MAX.into());
        total as i64
    }

    fn total(&self) -> i128 {
        self.committed + self.pending + self.in_flight
    }

    /// The value the sum would take after adding `delta`, if `i64` holds it
    fn checked_value(&self, delta: i128) -> Result<i64> {
        i64::try_from(self.total() + delta).map_err(|_| {
            LabelError::InvalidArgument(format!(
                "changing {} by {} leaves the score range",
                self.value(),
                delta
            ))
        })
    }

    /// The value currently on screen
    pub fn committed(&self) -> i128 {
        self.committed
    }

    pub fn pending(&self) -> i128 {
        self.pending
    }

    pub fn in_flight(&self) -> i128 {
        self.in_flight
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// True once nothing is left to reveal or announce
    pub fn is_settled(&self) -> bool {
        self.pending == 0 && self.in_flight == 0
    }

    /// Discard both buffers and show `value` immediately
    pub fn set_value(&mut self, value: i64) {
        self.pending = 0;
        self.in_flight = 0;
        self.committed = value.into();
        self.render();
    }

    /// Silently subtract from the committed value.
    ///
    /// Fails, leaving the counter untouched, if the true value would leave
    /// the `i64` range.
    pub fn remove_value(&mut self, value: i64) -> Result<()> {
        self.checked_value(-i128::from(value))?;
        self.committed -= i128::from(value);
        self.render();
        Ok(())
    }

    /// Register an amount whose announcement just started.
    ///
    /// Fails, leaving the counter untouched, if the true value would leave
    /// the `i64` range.
    pub fn announce(&mut self, amount: i64) -> Result<()> {
        self.checked_value(amount.into())?;
        self.in_flight += i128::from(amount);
        Ok(())
    }

    /// Move a finished announcement's amount into the pending buffer
    pub fn receive_commit(&mut self, amount: i64) {
        self.pending += i128::from(amount);
        self.in_flight -= i128::from(amount);
    }

    /// Reveal one frame's worth of the pending buffer. Returns the amount drained.
    pub fn tick(&mut self) -> i128 {
        let step = drain_step(self.pending);
        if step != 0 {
            self.committed += step;
            self.pending -= step;
            trace!(step, pending = self.pending, committed = self.committed, "drain");
        }
        self.render();
        step
    }

    fn render(&mut self) {
        self.display_text = self.committed.to_string();
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Amount of `pending` revealed on one frame.
///
/// A tenth of the buffer (floored), never less than one unit in magnitude.
/// The result always has the sign of `pending`, never exceeds it in magnitude,
/// and is zero only when `pending` is zero.
pub fn drain_step(pending: i128) -> i128 {
    let step = pending.div_euclid(DRAIN_DIVISOR);
    if pending > 0 {
        step.max(MIN_DRAIN_STEP)
    } else if pending < 0 {
        step.min(-MIN_DRAIN_STEP)
    } else {
        0
    }
}
