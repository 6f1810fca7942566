//! Frame-time tweens.
//!
//! A [`Tween`] counts down a fixed duration as the frame loop feeds it delta
//! time. [`Pulse`] chains two tweens into the label's grow-then-shrink
//! emphasis.

use crate::easing::Easing;

/// One-shot countdown over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub timer: f32,    // Time remaining
    pub duration: f32, // Total duration (for progress calculation)
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        let duration = duration.max(0.0);
        Self {
            timer: duration,
            duration,
            easing,
        }
    }

    /// Progress from 0.0 (just started) to 1.0 (finished)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (1.0 - self.timer / self.duration).clamp(0.0, 1.0)
    }

    /// Progress passed through the easing curve
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    /// Returns true if the tween is finished
    pub fn is_finished(&self) -> bool {
        self.timer <= 0.0
    }

    /// Advance the tween, returns true if still running
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        !self.is_finished()
    }
}

/// Grow-then-shrink scale emphasis
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    peak: f32,
    half_duration: f32,
    easing: Easing,
    phase: Option<PulsePhase>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PulsePhase {
    Growing(Tween),
    Shrinking(Tween),
}

impl Pulse {
    pub fn new(peak: f32, half_duration: f32, easing: Easing) -> Self {
        Self {
            peak,
            half_duration,
            easing,
            phase: None,
        }
    }

    /// Start the pulse, restarting it from scale 1.0 if one is running
    pub fn start(&mut self) {
        self.phase = Some(PulsePhase::Growing(Tween::new(self.half_duration, self.easing)));
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_some()
    }

    /// Current scale factor; exactly 1.0 when idle
    pub fn scale(&self) -> f32 {
        match &self.phase {
            None => 1.0,
            Some(PulsePhase::Growing(t)) => 1.0 + (self.peak - 1.0) * t.eased(),
            Some(PulsePhase::Shrinking(t)) => 1.0 + (self.peak - 1.0) * (1.0 - t.eased()),
        }
    }

    /// Advance the pulse, returns true if still running
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(phase) = &mut self.phase else {
            return false;
        };

        match phase {
            PulsePhase::Growing(t) => {
                let leftover = dt - t.timer.max(0.0);
                if !t.update(dt) {
                    let mut shrink = Tween::new(self.half_duration, self.easing);
                    shrink.update(leftover.max(0.0));
                    self.phase = if shrink.is_finished() {
                        None
                    } else {
                        Some(PulsePhase::Shrinking(shrink))
                    };
                }
            }
            PulsePhase::Shrinking(t) => {
                if !t.update(dt) {
                    self.phase = None;
                }
            }
        }
        self.phase.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_progress() {
        let mut t = Tween::new(0.5, Easing::Linear);
        assert_eq!(t.progress(), 0.0);
        assert!(t.update(0.25));
        assert!((t.progress() - 0.5).abs() < 1e-6);
        assert!(!t.update(0.25));
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let t = Tween::new(0.0, Easing::Linear);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_pulse_idle_scale() {
        let pulse = Pulse::new(1.5, 0.2, Easing::Linear);
        assert!(!pulse.is_active());
        assert_eq!(pulse.scale(), 1.0);
    }

    #[test]
    fn test_pulse_grows_then_shrinks() {
        let mut pulse = Pulse::new(1.5, 0.25, Easing::Linear);
        pulse.start();

        pulse.update(0.125);
        assert!((pulse.scale() - 1.25).abs() < 1e-4);

        pulse.update(0.125);
        assert!((pulse.scale() - 1.5).abs() < 1e-4);

        pulse.update(0.125);
        assert!((pulse.scale() - 1.25).abs() < 1e-4);

        assert!(!pulse.update(0.125));
        assert_eq!(pulse.scale(), 1.0);
    }

    #[test]
    fn test_pulse_restart() {
        let mut pulse = Pulse::new(2.0, 0.2, Easing::Linear);
        pulse.start();
        pulse.update(0.3);
        pulse.start();
        assert_eq!(pulse.scale(), 1.0);
        assert!(pulse.is_active());
    }

    #[test]
    fn test_pulse_long_frame_finishes() {
        let mut pulse = Pulse::new(1.5, 0.2, Easing::Linear);
        pulse.start();
        assert!(!pulse.update(1.0));
        assert_eq!(pulse.scale(), 1.0);
    }
}
