//! Magic Ball - a tilt-driven ball that stays inside its cage
//!
//! Core modules:
//! - `sim`: Region computation, saturating clamp, drag/sensor arbitration
//! - `settings`: Caller-supplied tunables

pub mod settings;
pub mod sim;

pub use settings::CageSettings;
pub use sim::{CageInput, CageState, GestureEvent, MotionReading, Region, tick};

/// Default configuration constants
pub mod consts {
    /// Sensor angle to points scale
    pub const DEFAULT_MULTIPLIER: f32 = 200.0;
    /// Sensor sampling interval and animation duration (ms)
    pub const DEFAULT_REFRESH_MS: u64 = 100;
    /// Ball diameter (points)
    pub const DEFAULT_BALL_SIZE: f32 = 40.0;
    pub const DEFAULT_BALL_COLOR: &str = "white";
    /// A drag with no frames for this long is treated as abandoned
    pub const DEFAULT_DRAG_TIMEOUT_MS: f64 = 2000.0;
}
