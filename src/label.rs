//! The score label: a counter that rolls toward its value while floating
//! announcements carry each change to it.
//!
//! All mutation happens on the caller's frame loop. Operations run
//! synchronously; the only deferred work is an announcement's travel, which
//! [`ScoreLabel::update`] advances once per frame.
//!
//! Per frame, the counter drains first, then the pulse advances, then
//! arrived announcements commit. An amount that lands on frame N starts
//! rolling on frame N + 1.

use crate::announcer::{Announcement, AnnouncementId, Announcer, Tone, Travel};
use crate::config::{Color, LabelConfig};
use crate::counter::CounterState;
use crate::error::{LabelError, Result};
use crate::events::{EventQueue, LabelEvent};
use crate::render::{LabelRenderer, TextLabel};
use crate::tween::Pulse;
use glam::Vec2;
use tracing::{debug, warn};

/// A rolling score counter.
///
/// Operations queue [`LabelEvent`]s for the host. Drain them with
/// [`drain_events`](Self::drain_events) once per frame; the queue keeps only
/// the most recent [`MAX_QUEUED_EVENTS`](crate::constants::MAX_QUEUED_EVENTS).
pub struct ScoreLabel<R: LabelRenderer = TextLabel> {
    config: LabelConfig,
    position: Vec2,
    counter: CounterState,
    announcer: Announcer,
    pulse: Pulse,
    renderer: R,
    events: EventQueue,
    disposed: bool,
}

impl ScoreLabel<TextLabel> {
    /// Create a label drawn through a retained [`TextLabel`]
    pub fn new(config: LabelConfig, position: Vec2) -> Result<Self> {
        Self::with_renderer(config, position, TextLabel::new())
    }
}

impl<R: LabelRenderer> ScoreLabel<R> {
    pub fn with_renderer(config: LabelConfig, position: Vec2, mut renderer: R) -> Result<Self> {
        config.validate()?;

        let counter = CounterState::new(config.value);
        renderer.set_text(counter.display_text());
        renderer.set_scale(1.0);

        let pulse = Pulse::new(config.pulse_scale, config.pulse_duration(), config.pulse_easing);

        Ok(Self {
            config,
            position,
            counter,
            announcer: Announcer::new(),
            pulse,
            renderer,
            events: EventQueue::new(),
            disposed: false,
        })
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            Err(LabelError::InvalidState("label has been disposed".into()))
        } else {
            Ok(())
        }
    }

    /// Overwrite the value, discarding any change still rolling or in flight
    pub fn set_value(&mut self, value: i64) -> Result<()> {
        self.ensure_live()?;

        for announcement in self.announcer.cancel_all() {
            self.release(&announcement);
        }
        self.counter.set_value(value);
        self.renderer.set_text(self.counter.display_text());
        self.events.push(LabelEvent::ValueSet { value });
        debug!(value, "value set");
        Ok(())
    }

    /// Subtract from the value with no animation
    pub fn remove_value(&mut self, value: i64) -> Result<()> {
        self.ensure_live()?;

        self.counter.remove_value(value)?;
        self.renderer.set_text(self.counter.display_text());
        self.events.push(LabelEvent::ValueRemoved { amount: value });
        debug!(amount = value, total = self.counter.value(), "value removed");
        Ok(())
    }

    /// The true value, including amounts still rolling or in flight.
    ///
    /// Always use this rather than [`displayed_value`](Self::displayed_value)
    /// when the number matters.
    pub fn get_value(&self) -> Result<i64> {
        self.ensure_live()?;
        Ok(self.counter.value())
    }

    /// Announce `amount` from `origin`. The value changes now; the display
    /// follows once the announcement reaches the counter.
    pub fn add_value(&mut self, amount: i64, origin: Vec2) -> Result<AnnouncementId> {
        self.ensure_live()?;

        self.counter.announce(amount)?;
        let tone = Tone::for_amount(amount, self.config.positive_is_good);
        let id = self.announcer.spawn(
            amount,
            tone,
            Travel {
                origin,
                target: self.position,
                duration: self.config.update_duration(),
                easing: self.config.update_easing,
            },
        );
        self.events.push(LabelEvent::Announced { id, amount });
        debug!(%id, amount, ?tone, total = self.counter.value(), "announced");
        Ok(id)
    }

    /// Multiply the value by `factor`, announcing the difference from `origin`
    pub fn add_multiplier(&mut self, factor: f64, origin: Vec2) -> Result<AnnouncementId> {
        self.ensure_live()?;
        check_finite(factor)?;

        let value = self.counter.value();
        let scaled = multiply(value, factor)?;
        let amount = scaled.checked_sub(value).ok_or_else(|| {
            LabelError::InvalidArgument(format!("multiplying {} by {} overflows", value, factor))
        })?;
        self.add_value(amount, origin)
    }

    /// Undo a multiplier silently: the value becomes `value / factor`
    pub fn remove_multiplier(&mut self, factor: f64) -> Result<()> {
        self.ensure_live()?;
        check_finite(factor)?;
        if factor == 0.0 {
            return Err(LabelError::InvalidArgument(
                "cannot remove a multiplier of zero".into(),
            ));
        }

        let value = self.counter.value();
        let kept = divide(value, factor)?;
        let removed = value.checked_sub(kept).ok_or_else(|| {
            LabelError::InvalidArgument(format!("dividing {} by {} overflows", value, factor))
        })?;
        self.remove_value(removed)
    }

    /// Advance one frame by `dt` seconds
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.ensure_live()?;
        puffin::profile_function!();

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let was_rolling = self.counter.pending() != 0;
        self.counter.tick();
        self.renderer.set_text(self.counter.display_text());
        if was_rolling && self.counter.pending() == 0 {
            self.events.push(LabelEvent::Settled {
                value: self.counter.committed(),
            });
        }

        if self.pulse.is_active() {
            self.pulse.update(dt);
            self.renderer.set_scale(self.pulse.scale());
        }

        for announcement in self.announcer.update(dt) {
            self.counter.receive_commit(announcement.amount);
            self.renderer.release_announcement(announcement.id);
            self.events.push(LabelEvent::Committed {
                id: announcement.id,
                amount: announcement.amount,
            });
            debug!(id = %announcement.id, amount = announcement.amount, "committed");

            if self.config.pulse_enabled {
                self.pulse.start();
                self.renderer.set_scale(self.pulse.scale());
                self.events.push(LabelEvent::PulseStarted);
            }
        }

        Ok(())
    }

    /// Tear the label down.
    ///
    /// Announcements still travelling are dropped without committing, so
    /// their amounts are lost along with the label.
    pub fn dispose(&mut self) -> Result<()> {
        self.ensure_live()?;

        let cancelled = self.announcer.cancel_all();
        if !cancelled.is_empty() {
            let lost: i128 = cancelled.iter().map(|a| i128::from(a.amount)).sum();
            warn!(count = cancelled.len(), lost, "dropping in-flight announcements on dispose");
        }
        for announcement in &cancelled {
            self.release(announcement);
        }

        self.disposed = true;
        debug!(value = self.counter.value(), "label disposed");
        Ok(())
    }

    fn release(&mut self, announcement: &Announcement) {
        self.renderer.release_announcement(announcement.id);
        self.events.push(LabelEvent::Cancelled {
            id: announcement.id,
            amount: announcement.amount,
        });
    }

    /// The value currently on screen
    pub fn displayed_value(&self) -> i128 {
        self.counter.committed()
    }

    pub fn display_text(&self) -> &str {
        self.counter.display_text()
    }

    pub fn pending(&self) -> i128 {
        self.counter.pending()
    }

    pub fn in_flight(&self) -> i128 {
        self.counter.in_flight()
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    /// Current pulse scale, 1.0 when idle
    pub fn scale(&self) -> f32 {
        self.pulse.scale()
    }

    pub fn announcements(&self) -> &[Announcement] {
        self.announcer.announcements()
    }

    /// Color an announcement of the given tone is drawn in
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Good => self.config.update_font.color,
            Tone::Bad => self.config.bad_color,
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the counter. Announcements already travelling keep their target.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Drain events emitted since the last call
    pub fn drain_events(&mut self) -> impl Iterator<Item = LabelEvent> + '_ {
        self.events.drain()
    }
}

fn check_finite(factor: f64) -> Result<()> {
    if factor.is_finite() {
        Ok(())
    } else {
        Err(LabelError::InvalidArgument(format!(
            "multiplier must be finite, got {}",
            factor
        )))
    }
}

/// `value * factor`, rounded half away from zero
fn multiply(value: i64, factor: f64) -> Result<i64> {
    match integral_factor(factor) {
        Some(n) => checked_score(i128::from(value) * n),
        None => to_score(value as f64 * factor),
    }
}

/// `value / factor`, rounded half away from zero. `factor` is non-zero.
fn divide(value: i64, factor: f64) -> Result<i64> {
    match integral_factor(factor) {
        Some(n) => checked_score(div_round(i128::from(value), n)),
        None => to_score(value as f64 / factor),
    }
}

/// Whole factors up to 2^63 in magnitude, which scale a score exactly
fn integral_factor(factor: f64) -> Option<i128> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if factor.fract() == 0.0 && factor.abs() <= LIMIT {
        Some(factor as i128)
    } else {
        None
    }
}

/// Integer quotient rounded half away from zero, matching `f64::round`
fn div_round(n: i128, d: i128) -> i128 {
    let (q, r) = (n / d, n % d);
    if 2 * r.abs() >= d.abs() {
        q + n.signum() * d.signum()
    } else {
        q
    }
}

fn checked_score(x: i128) -> Result<i64> {
    i64::try_from(x)
        .map_err(|_| LabelError::InvalidArgument(format!("{} is not a representable score", x)))
}

/// Round to the nearest integer score, rejecting anything `i64` cannot hold
fn to_score(x: f64) -> Result<i64> {
    let rounded = x.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(LabelError::InvalidArgument(format!("{} is not a representable score", x)))
    }
}
