//! Drag/sensor arbitration
//!
//! Sensor deltas are incremental while a drag is absolute from its anchor,
//! so only one of them may write the position at a time. The arbiter is the
//! only place that decides which one; it is never toggled ad hoc.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clamp::clamp_move;
use super::region::Region;

/// Who currently owns the ball position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Arbiter {
    /// Sensor ticks move the ball
    #[default]
    Idle,
    /// A touch drag owns the ball; sensor ticks are discarded
    Dragging {
        /// Position when the drag started
        anchor: Vec2,
        /// Timestamp (ms) of the last drag start or frame
        last_activity_ms: f64,
    },
}

impl Arbiter {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Arbiter::Dragging { .. })
    }

    /// Whether a sensor delta may be applied right now
    pub fn accepts_sensor(&self) -> bool {
        !self.is_dragging()
    }

    /// Enter `Dragging`, anchoring at `position`.
    ///
    /// Starting again while already dragging re-anchors.
    pub fn begin_drag(&mut self, position: Vec2, now_ms: f64) {
        *self = Arbiter::Dragging {
            anchor: position,
            last_activity_ms: now_ms,
        };
    }

    /// Position for a drag frame with cumulative `translation`.
    ///
    /// Returns `None` when idle (stray frame after the drag ended).
    pub fn drag_to(&mut self, translation: Vec2, region: &Region, now_ms: f64) -> Option<Vec2> {
        match self {
            Arbiter::Dragging {
                anchor,
                last_activity_ms,
            } => {
                *last_activity_ms = now_ms;
                let translation = if translation.is_finite() {
                    translation
                } else {
                    Vec2::ZERO
                };
                Some(clamp_move(*anchor, translation, region))
            }
            Arbiter::Idle => None,
        }
    }

    /// Leave `Dragging` on gesture end. Returns false if there was no drag.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Arbiter::Idle;
        was_dragging
    }

    /// Leave `Dragging` on gesture cancel. Same transition as [`Self::end_drag`].
    pub fn cancel_drag(&mut self) -> bool {
        self.end_drag()
    }

    /// Force `Idle` if no drag activity happened for `timeout_ms`.
    ///
    /// A timeout of zero disables the check. Returns true if the drag expired.
    pub fn expire(&mut self, now_ms: f64, timeout_ms: f64) -> bool {
        if timeout_ms <= 0.0 {
            return false;
        }
        match *self {
            Arbiter::Dragging {
                last_activity_ms, ..
            } if now_ms - last_activity_ms >= timeout_ms => {
                *self = Arbiter::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region {
            left: -100.0,
            right: 100.0,
            top: -150.0,
            bottom: 150.0,
        }
    }

    #[test]
    fn test_starts_idle() {
        let arbiter = Arbiter::default();
        assert_eq!(arbiter, Arbiter::Idle);
        assert!(arbiter.accepts_sensor());
    }

    #[test]
    fn test_drag_is_relative_to_anchor() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::new(10.0, 10.0), 0.0);
        assert!(!arbiter.accepts_sensor());

        let pos = arbiter.drag_to(Vec2::new(30.0, -5.0), &region(), 16.0);
        assert_eq!(pos, Some(Vec2::new(40.0, 5.0)));
        // Cumulative translation, not accumulated
        let pos = arbiter.drag_to(Vec2::new(35.0, -5.0), &region(), 32.0);
        assert_eq!(pos, Some(Vec2::new(45.0, 5.0)));
    }

    #[test]
    fn test_drag_clamps_to_region() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::ZERO, 0.0);
        let pos = arbiter.drag_to(Vec2::new(500.0, -500.0), &region(), 16.0);
        assert_eq!(pos, Some(Vec2::new(100.0, -150.0)));
    }

    #[test]
    fn test_drag_to_ignored_when_idle() {
        let mut arbiter = Arbiter::Idle;
        assert_eq!(arbiter.drag_to(Vec2::new(5.0, 5.0), &region(), 0.0), None);
    }

    #[test]
    fn test_non_finite_translation_stays_at_anchor() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::new(7.0, 8.0), 0.0);
        let pos = arbiter.drag_to(Vec2::new(f32::NAN, 3.0), &region(), 16.0);
        assert_eq!(pos, Some(Vec2::new(7.0, 8.0)));
    }

    #[test]
    fn test_end_and_cancel_return_to_idle() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::ZERO, 0.0);
        assert!(arbiter.end_drag());
        assert_eq!(arbiter, Arbiter::Idle);
        assert!(!arbiter.end_drag());

        arbiter.begin_drag(Vec2::ZERO, 0.0);
        assert!(arbiter.cancel_drag());
        assert!(arbiter.accepts_sensor());
    }

    #[test]
    fn test_expire_after_timeout() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::ZERO, 1000.0);
        assert!(!arbiter.expire(2999.0, 2000.0));
        assert!(arbiter.is_dragging());

        // Activity pushes the deadline out
        arbiter.drag_to(Vec2::ONE, &region(), 2500.0);
        assert!(!arbiter.expire(4000.0, 2000.0));
        assert!(arbiter.expire(4500.0, 2000.0));
        assert_eq!(arbiter, Arbiter::Idle);
    }

    #[test]
    fn test_zero_timeout_disables_watchdog() {
        let mut arbiter = Arbiter::Idle;
        arbiter.begin_drag(Vec2::ZERO, 0.0);
        assert!(!arbiter.expire(1.0e9, 0.0));
        assert!(arbiter.is_dragging());
    }
}
