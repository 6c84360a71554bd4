//! Cage settings
//!
//! Supplied by the caller, never persisted. Loaded from a JSON file by the
//! demo binary; missing fields fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables for one cage and its ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CageSettings {
    /// Sensor angle to movement scale
    pub multiplier: f32,
    /// Sensor sampling interval, also used as the ball animation duration (ms)
    pub refresh_ms: u64,
    /// Ball diameter in points
    pub ball_size: f32,
    /// Ball color (presentation only)
    pub ball_color: String,
    /// Force a stuck drag back to idle after this long without activity (0 = never)
    pub drag_timeout_ms: f64,
}

impl Default for CageSettings {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            refresh_ms: DEFAULT_REFRESH_MS,
            ball_size: DEFAULT_BALL_SIZE,
            ball_color: DEFAULT_BALL_COLOR.to_string(),
            drag_timeout_ms: DEFAULT_DRAG_TIMEOUT_MS,
        }
    }
}

impl CageSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Replace unusable numeric values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.multiplier.is_finite() {
            log::warn!("multiplier {} is not finite, using {}", self.multiplier, defaults.multiplier);
            self.multiplier = defaults.multiplier;
        }
        if self.refresh_ms == 0 {
            log::warn!("refresh_ms must be positive, using {}", defaults.refresh_ms);
            self.refresh_ms = defaults.refresh_ms;
        }
        if !(self.ball_size.is_finite() && self.ball_size > 0.0) {
            log::warn!("ball_size {} is invalid, using {}", self.ball_size, defaults.ball_size);
            self.ball_size = defaults.ball_size;
        }
        if !(self.drag_timeout_ms.is_finite() && self.drag_timeout_ms >= 0.0) {
            log::warn!(
                "drag_timeout_ms {} is invalid, using {}",
                self.drag_timeout_ms,
                defaults.drag_timeout_ms
            );
            self.drag_timeout_ms = defaults.drag_timeout_ms;
        }
        self
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// How long the presentation layer should tween toward a new position
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}
