//! Floating delta announcements.
//!
//! An announcement carries one delta from the point where it happened to the
//! counter. It is spawned, animated, and removed by the [`Announcer`]; the
//! label commits its amount when the travel finishes.

use crate::easing::Easing;
use crate::tween::Tween;
use glam::Vec2;
use std::fmt;

/// Identifies one announcement for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementId(pub u64);

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a delta is good or bad news for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
}

impl Tone {
    /// Negative deltas are bad news unless the polarity is flipped; zero counts as positive
    pub fn for_amount(amount: i64, positive_is_good: bool) -> Self {
        match (amount < 0, positive_is_good) {
            (true, true) | (false, false) => Tone::Bad,
            (true, false) | (false, true) => Tone::Good,
        }
    }
}

/// Text shown for a delta: positive values carry an explicit `+`
pub fn format_delta(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", amount)
    } else {
        amount.to_string()
    }
}

/// One delta in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub amount: i64,
    pub origin: Vec2,
    pub target: Vec2,
    pub tone: Tone,
    pub message: String,
    pub tween: Tween,
}

impl Announcement {
    /// Progress from 0.0 (just spawned) to 1.0 (arrived)
    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }

    /// Current screen position along the eased path
    pub fn position(&self) -> Vec2 {
        self.origin.lerp(self.target, self.tween.eased())
    }

    /// Opacity, fading from 1.0 to 0.0 over the travel
    pub fn alpha(&self) -> f32 {
        1.0 - self.tween.eased()
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}

/// Everything needed to start an announcement
#[derive(Debug, Clone, Copy)]
pub struct Travel {
    pub origin: Vec2,
    pub target: Vec2,
    pub duration: f32,
    pub easing: Easing,
}

/// Manager for all live announcements
#[derive(Debug, Default)]
pub struct Announcer {
    announcements: Vec<Announcement>,
    next_id: u64,
}

impl Announcer {
    pub fn new() -> Self {
        Self {
            announcements: Vec::new(),
            next_id: 0,
        }
    }

    /// Start a new announcement
    pub fn spawn(&mut self, amount: i64, tone: Tone, travel: Travel) -> AnnouncementId {
        let id = AnnouncementId(self.next_id);
        self.next_id += 1;
        self.announcements.push(Announcement {
            id,
            amount,
            origin: travel.origin,
            target: travel.target,
            tone,
            message: format_delta(amount),
            tween: Tween::new(travel.duration, travel.easing),
        });
        id
    }

    /// Advance every announcement and remove the ones that arrived.
    ///
    /// Arrived announcements are returned in the order they finished; ties
    /// keep spawn order.
    pub fn update(&mut self, dt: f32) -> Vec<Announcement> {
        for announcement in &mut self.announcements {
            announcement.tween.update(dt);
        }

        let (mut arrived, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.announcements)
            .into_iter()
            .partition(Announcement::is_finished);
        self.announcements = live;

        // The most overdue timer finished first
        arrived.sort_by(|a, b| a.tween.timer.total_cmp(&b.tween.timer).then(a.id.cmp(&b.id)));
        arrived
    }

    /// Remove every live announcement without letting it arrive
    pub fn cancel_all(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.announcements)
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn get(&self, id: AnnouncementId) -> Option<&Announcement> {
        self.announcements.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.announcements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel(duration: f32) -> Travel {
        Travel {
            origin: Vec2::new(0.0, 100.0),
            target: Vec2::new(200.0, 0.0),
            duration,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_tone_polarity() {
        assert_eq!(Tone::for_amount(5, true), Tone::Good);
        assert_eq!(Tone::for_amount(-5, true), Tone::Bad);
        assert_eq!(Tone::for_amount(0, true), Tone::Good);
        assert_eq!(Tone::for_amount(5, false), Tone::Bad);
        assert_eq!(Tone::for_amount(-5, false), Tone::Good);
        assert_eq!(Tone::for_amount(0, false), Tone::Bad);
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(50), "+50");
        assert_eq!(format_delta(-3), "-3");
        assert_eq!(format_delta(0), "0");
    }

    #[test]
    fn test_spawn_assigns_ids() {
        let mut announcer = Announcer::new();
        let a = announcer.spawn(1, Tone::Good, travel(1.0));
        let b = announcer.spawn(2, Tone::Good, travel(1.0));
        assert_ne!(a, b);
        assert_eq!(announcer.len(), 2);
        assert_eq!(announcer.get(b).map(|x| x.amount), Some(2));
    }

    #[test]
    fn test_travel_path_and_fade() {
        let mut announcer = Announcer::new();
        let id = announcer.spawn(7, Tone::Good, travel(1.0));

        let a = announcer.get(id).unwrap();
        assert_eq!(a.position(), Vec2::new(0.0, 100.0));
        assert_eq!(a.alpha(), 1.0);

        assert!(announcer.update(0.5).is_empty());
        let a = announcer.get(id).unwrap();
        assert!((a.position() - Vec2::new(100.0, 50.0)).length() < 1e-3);
        assert!((a.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_update_returns_arrivals() {
        let mut announcer = Announcer::new();
        announcer.spawn(7, Tone::Good, travel(0.5));
        announcer.spawn(8, Tone::Good, travel(2.0));

        let arrived = announcer.update(0.5);
        assert_eq!(arrived.len(), 1);
        assert_eq!(arrived[0].amount, 7);
        assert_eq!(announcer.len(), 1);
    }

    #[test]
    fn test_arrivals_in_finish_order() {
        let mut announcer = Announcer::new();
        announcer.spawn(1, Tone::Good, travel(0.75));
        announcer.spawn(2, Tone::Good, travel(0.25));
        announcer.spawn(3, Tone::Good, travel(0.25));

        let arrived: Vec<i64> = announcer.update(1.0).iter().map(|a| a.amount).collect();
        assert_eq!(arrived, vec![2, 3, 1]);
        assert!(announcer.is_empty());
    }

    #[test]
    fn test_zero_duration_arrives_next_update() {
        let mut announcer = Announcer::new();
        announcer.spawn(0, Tone::Good, travel(0.0));
        assert_eq!(announcer.update(0.0).len(), 1);
    }

    #[test]
    fn test_cancel_all() {
        let mut announcer = Announcer::new();
        announcer.spawn(4, Tone::Bad, travel(1.0));
        announcer.spawn(-4, Tone::Good, travel(1.0));
        let cancelled = announcer.cancel_all();
        assert_eq!(cancelled.len(), 2);
        assert!(announcer.is_empty());
        assert!(announcer.update(5.0).is_empty());
    }
}
