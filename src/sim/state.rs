//! Cage state: one ball, its travel region, and who controls it
//!
//! Not persisted; serializable so a host can snapshot it for debugging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arbiter::Arbiter;
use super::clamp::clamp_move;
use super::region::{Region, compute_region, screen_anchor};
use crate::settings::CageSettings;

/// Things that happened during a tick (drained by the host)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CageEvent {
    DragStarted { anchor: Vec2 },
    DragEnded { position: Vec2 },
    DragCancelled { position: Vec2 },
    /// Watchdog forced the arbiter back to idle
    DragExpired { position: Vec2 },
    /// A sensor tick arrived mid-drag and was discarded
    SensorSuppressed,
    RegionChanged { region: Region },
}

/// State for a single ball instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CageState {
    /// Clamped position, relative to the viewport center
    position: Vec2,
    /// Current travel region
    region: Region,
    /// Viewport size in points
    viewport: Vec2,
    /// Ball diameter in points
    ball_size: f32,
    /// Sensor angle to points scale
    pub multiplier: f32,
    /// Drag watchdog timeout (0 disables)
    pub drag_timeout_ms: f64,
    /// Drag/sensor arbitration
    pub(crate) arbiter: Arbiter,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<CageEvent>,
}

impl CageState {
    /// Create a cage for `viewport` with the ball at the center (or the
    /// nearest point of the region when the ball does not fit)
    pub fn new(viewport: Vec2, settings: &CageSettings) -> Self {
        let settings = settings.clone().sanitized();
        let mut state = Self {
            position: Vec2::ZERO,
            region: compute_region(viewport.x, viewport.y, settings.ball_size),
            viewport,
            ball_size: settings.ball_size,
            multiplier: settings.multiplier,
            drag_timeout_ms: settings.drag_timeout_ms,
            arbiter: Arbiter::Idle,
            events: Vec::new(),
        };
        state.apply_delta(Vec2::ZERO);
        state
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn ball_size(&self) -> f32 {
        self.ball_size
    }

    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    pub fn is_dragging(&self) -> bool {
        self.arbiter.is_dragging()
    }

    /// Absolute screen offset of the ball when `position` is zero
    pub fn screen_anchor(&self) -> Vec2 {
        screen_anchor(self.viewport.x, self.viewport.y, self.ball_size)
    }

    /// Absolute screen position of the ball's top-left corner
    pub fn screen_position(&self) -> Vec2 {
        super::region::to_screen(self.position, self.screen_anchor())
    }

    /// Move by `delta`, saturating at the region edges
    pub(crate) fn apply_delta(&mut self, delta: Vec2) {
        self.position = clamp_move(self.position, delta, &self.region);
    }

    /// Overwrite the position. Callers pass values already clamped.
    pub(crate) fn set_position(&mut self, position: Vec2) {
        debug_assert!(self.region.is_degenerate() || self.region.contains(position));
        self.position = position;
    }

    /// Recompute the region for a new viewport and pull the ball back inside
    pub(crate) fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.region = compute_region(viewport.x, viewport.y, self.ball_size);
        self.apply_delta(Vec2::ZERO);
        self.events.push(CageEvent::RegionChanged {
            region: self.region,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<CageEvent> {
        std::mem::take(&mut self.events)
    }
}
