//! Inputs delivered to the cage by the host event loop
//!
//! Sensor readings arrive as the device-motion payload with every field
//! optional; some devices report partial rotation data in some orientations.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Device rotation angles (radians)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation around the screen normal (unused)
    #[serde(default)]
    pub alpha: Option<f32>,
    /// Tilt forward/back, drives Y
    #[serde(default)]
    pub beta: Option<f32>,
    /// Tilt left/right, drives X
    #[serde(default)]
    pub gamma: Option<f32>,
}

/// One motion-sensor sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionReading {
    #[serde(default)]
    pub rotation: Option<Rotation>,
}

impl MotionReading {
    pub fn new(beta: f32, gamma: f32) -> Self {
        Self {
            rotation: Some(Rotation {
                alpha: None,
                beta: Some(beta),
                gamma: Some(gamma),
            }),
        }
    }

    /// Convert to a movement delta. Missing or non-finite angles count as zero.
    pub fn to_delta(&self, multiplier: f32) -> Vec2 {
        let rotation = self.rotation.unwrap_or_default();
        let delta = Vec2::new(
            round_reading(rotation.gamma) * multiplier,
            round_reading(rotation.beta) * multiplier,
        );
        if delta.is_finite() { delta } else { Vec2::ZERO }
    }
}

/// Round an angle to two decimals, mapping absent/garbage readings to 0
fn round_reading(angle: Option<f32>) -> f32 {
    match angle {
        Some(a) if a.is_finite() => (a * 100.0).round() / 100.0,
        _ => 0.0,
    }
}

/// Touch drag lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    Start,
    /// Cumulative translation since `Start`
    Move { translation: Vec2 },
    End,
    Cancel,
}

/// Everything `tick` can be fed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CageInput {
    Sensor { reading: MotionReading },
    Gesture { gesture: GestureEvent },
    /// Viewport size changed (orientation, window resize)
    Resize { width: f32, height: f32 },
    /// Animation frame with no movement; lets the drag watchdog run
    Frame,
}

impl From<MotionReading> for CageInput {
    fn from(reading: MotionReading) -> Self {
        CageInput::Sensor { reading }
    }
}

impl From<GestureEvent> for CageInput {
    fn from(gesture: GestureEvent) -> Self {
        CageInput::Gesture { gesture }
    }
}
