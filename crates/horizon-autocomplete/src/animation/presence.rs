//! Two-phase visibility for the floating panel.
//!
//! The panel stays mounted while its exit transition runs, so "is mounted"
//! and "is open" are tracked separately:
//!
//! ```text
//! Unmounted -> Mounting -> Visible -> Unmounting -> Unmounted
//!                  ^                       |
//!                  +------- reopen --------+
//! ```
//!
//! Reversing direction mid-flight continues from the current progress, so
//! opacity never jumps.

use std::time::{Duration, Instant};

use horizon_autocomplete_core::logging::targets;

use super::easing::{lerp_eased, Easing};
use crate::positioning::Side;

/// Default transition duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Vertical distance the panel travels while fading in or out.
pub const TRANSLATE_DISTANCE: f32 = 8.0;

/// Mount phase of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePhase {
    #[default]
    Unmounted,
    Mounting,
    Visible,
    Unmounting,
}

/// Style values for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyles {
    pub opacity: f32,
    /// Vertical translation in pixels.
    pub translate_y: f32,
}

impl TransitionStyles {
    /// Fully shown, no translation.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

/// The mount/visibility state machine.
#[derive(Debug, Clone)]
pub struct Presence {
    phase: PresencePhase,
    duration: Duration,
    easing: Easing,
    /// Progress when the current phase started.
    from: f32,
    started: Option<Instant>,
}

impl Default for Presence {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl Presence {
    /// Create an unmounted presence with the given transition duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: PresencePhase::Unmounted,
            duration,
            easing: Easing::default(),
            from: 0.0,
            started: None,
        }
    }

    /// Set the easing curve (builder pattern).
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the panel should be in the tree.
    pub fn is_mounted(&self) -> bool {
        self.phase != PresencePhase::Unmounted
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PresencePhase::Mounting | PresencePhase::Unmounting)
    }

    /// Linear progress toward fully shown, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            PresencePhase::Unmounted => 0.0,
            PresencePhase::Visible => 1.0,
            PresencePhase::Mounting => (self.from + self.elapsed_fraction(now)).min(1.0),
            PresencePhase::Unmounting => (self.from - self.elapsed_fraction(now)).max(0.0),
        }
    }

    fn elapsed_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self
            .started
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Follow the open state. Returns `true` if the phase changed.
    pub fn set_open(&mut self, open: bool, now: Instant) -> bool {
        let next = match (open, self.phase) {
            (true, PresencePhase::Unmounted | PresencePhase::Unmounting) => PresencePhase::Mounting,
            (false, PresencePhase::Mounting | PresencePhase::Visible) => PresencePhase::Unmounting,
            _ => return false,
        };
        self.from = self.progress(now);
        self.started = Some(now);
        self.phase = next;
        tracing::debug!(target: targets::PRESENCE, phase = ?next, from = self.from, "presence");
        self.tick(now);
        true
    }

    /// Settle the phase once the transition has run its course.
    pub fn tick(&mut self, now: Instant) -> PresencePhase {
        let progress = self.progress(now);
        let settled = match self.phase {
            PresencePhase::Mounting if progress >= 1.0 => Some(PresencePhase::Visible),
            PresencePhase::Unmounting if progress <= 0.0 => Some(PresencePhase::Unmounted),
            _ => None,
        };
        if let Some(phase) = settled {
            self.phase = phase;
            self.started = None;
            self.from = progress;
            tracing::trace!(target: targets::PRESENCE, ?phase, "settled");
        }
        self.phase
    }

    /// Opacity and translation for the current frame.
    ///
    /// The panel starts 8px toward the reference: above it when below the
    /// reference, below it when above.
    pub fn styles(&self, now: Instant, side: Side) -> TransitionStyles {
        let initial = match side {
            Side::Top => TRANSLATE_DISTANCE,
            Side::Bottom => -TRANSLATE_DISTANCE,
        };
        let t = self.progress(now);
        TransitionStyles {
            opacity: lerp_eased(self.easing, 0.0, 1.0, t),
            translate_y: lerp_eased(self.easing, initial, 0.0, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_open_then_settle() {
        let start = Instant::now();
        let mut presence = Presence::default();
        assert!(!presence.is_mounted());

        assert!(presence.set_open(true, start));
        assert_eq!(presence.phase(), PresencePhase::Mounting);
        assert!(presence.is_mounted());
        assert!(presence.is_animating());

        let styles = presence.styles(start, Side::Bottom);
        assert_eq!(styles.opacity, 0.0);
        assert_eq!(styles.translate_y, -8.0);

        assert_eq!(presence.tick(start + ms(100)), PresencePhase::Mounting);
        assert_eq!(presence.tick(start + ms(200)), PresencePhase::Visible);
        assert!(!presence.is_animating());
        assert_eq!(presence.styles(start + ms(300), Side::Top), TransitionStyles::SETTLED);
    }

    #[test]
    fn test_close_stays_mounted_until_done() {
        let start = Instant::now();
        let mut presence = Presence::default();
        presence.set_open(true, start);
        presence.tick(start + ms(200));

        presence.set_open(false, start + ms(300));
        assert_eq!(presence.phase(), PresencePhase::Unmounting);
        assert!(presence.is_mounted());
        assert_eq!(presence.tick(start + ms(400)), PresencePhase::Unmounting);
        assert_eq!(presence.tick(start + ms(500)), PresencePhase::Unmounted);
        assert!(!presence.is_mounted());
    }

    #[test]
    fn test_reopen_mid_exit_continues() {
        let start = Instant::now();
        let mut presence = Presence::default();
        presence.set_open(true, start);
        presence.tick(start + ms(200));

        presence.set_open(false, start + ms(200));
        let mid = start + ms(250);
        let before = presence.progress(mid);
        assert!((before - 0.75).abs() < 1e-3);

        presence.set_open(true, mid);
        assert_eq!(presence.phase(), PresencePhase::Mounting);
        assert!((presence.progress(mid) - before).abs() < 1e-6);
        // Only the remaining quarter needs to run.
        assert_eq!(presence.tick(mid + ms(30)), PresencePhase::Mounting);
        assert_eq!(presence.tick(mid + ms(60)), PresencePhase::Visible);
    }

    #[test]
    fn test_redundant_set_open_is_ignored() {
        let start = Instant::now();
        let mut presence = Presence::default();
        assert!(!presence.set_open(false, start));
        presence.set_open(true, start);
        assert!(!presence.set_open(true, start + ms(10)));
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let now = Instant::now();
        let mut presence = Presence::new(Duration::ZERO);
        presence.set_open(true, now);
        assert_eq!(presence.phase(), PresencePhase::Visible);
        presence.set_open(false, now);
        assert_eq!(presence.phase(), PresencePhase::Unmounted);
    }
}
