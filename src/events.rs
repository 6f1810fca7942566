//! Label event system for decoupled communication with the host.
//!
//! The label emits events as announcements start, land, and settle. The host
//! drains them once per frame to drive sound, logging, or other UI.

use std::collections::VecDeque;

use crate::announcer::AnnouncementId;
use crate::constants::MAX_QUEUED_EVENTS;
use tracing::warn;

/// Events a label emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEvent {
    /// An announcement started travelling toward the counter
    Announced { id: AnnouncementId, amount: i64 },
    /// An announcement landed; its amount is now being revealed
    Committed { id: AnnouncementId, amount: i64 },
    /// The pulse emphasis (re)started
    PulseStarted,
    /// The pending buffer drained to zero on this frame
    Settled { value: i128 },
    /// The value was overwritten
    ValueSet { value: i64 },
    /// An amount was removed without animation
    ValueRemoved { amount: i64 },
    /// An announcement was dropped before landing
    Cancelled { id: AnnouncementId, amount: i64 },
}

/// Simple event queue - events are pushed during update, drained by the host.
///
/// The queue holds at most `capacity` events. A host that stops draining
/// loses the oldest ones first.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<LabelEvent>,
    capacity: usize,
    dropped: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::with_capacity(MAX_QUEUED_EVENTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: LabelEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            if self.dropped == 0 {
                warn!(capacity = self.capacity, "event queue full, dropping oldest events");
            }
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = LabelEvent> + '_ {
        self.dropped = 0;
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events discarded since the last drain
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
