//! Travel region for the ball
//!
//! The coordinate system is centered on the viewport: `(0, 0)` is the
//! middle of the screen, so the region is symmetric around zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-axis limits the ball position may take
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Region {
    /// Lower corner (left, top)
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Upper corner (right, bottom)
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    /// True when the object does not fit on at least one axis
    pub fn is_degenerate(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Check if a position lies inside the region (edges included)
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }
}

/// Compute the travel region for an object of `object_size` in a viewport.
///
/// Degenerate input (object larger than half the viewport) yields
/// `left > right` / `top > bottom` instead of failing.
pub fn compute_region(viewport_width: f32, viewport_height: f32, object_size: f32) -> Region {
    let half_w = viewport_width / 2.0;
    let half_h = viewport_height / 2.0;
    Region {
        left: -(half_w - object_size),
        right: half_w - object_size,
        top: -(half_h - object_size),
        bottom: half_h - object_size,
    }
}

/// Absolute screen offset that puts the object's center at the viewport center
pub fn screen_anchor(viewport_width: f32, viewport_height: f32, object_size: f32) -> Vec2 {
    let half = object_size / 2.0;
    Vec2::new(viewport_width / 2.0 - half, viewport_height / 2.0 - half)
}

/// Translate a centered position into absolute screen coordinates
#[inline]
pub fn to_screen(pos: Vec2, anchor: Vec2) -> Vec2 {
    anchor + pos
}
