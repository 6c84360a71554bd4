//! Ball movement core
//!
//! Pure and deterministic: every input carries its own timestamp, nothing
//! here reads a clock, renders, or touches the platform.

pub mod arbiter;
pub mod clamp;
pub mod input;
pub mod region;
pub mod state;
pub mod tick;

pub use arbiter::Arbiter;
pub use clamp::{clamp_axis, clamp_move};
pub use input::{CageInput, GestureEvent, MotionReading, Rotation};
pub use region::{Region, compute_region, screen_anchor, to_screen};
pub use state::{CageEvent, CageState};
pub use tick::tick;
