//! Input routing
//!
//! Every input goes through the arbiter first, then through the clamp.
//! Inputs are expected one at a time from the host event loop, but sensor
//! and gesture feeds may interleave in any order.

use glam::Vec2;

use super::input::{CageInput, GestureEvent, MotionReading};
use super::state::{CageEvent, CageState};

/// Handle one input at time `now_ms`
pub fn tick(state: &mut CageState, input: &CageInput, now_ms: f64) {
    // Events only describe the current tick
    state.events.clear();

    // Watchdog runs before the input so a late sensor tick sees Idle
    if state.arbiter.expire(now_ms, state.drag_timeout_ms) {
        let position = state.position();
        log::warn!(
            "Drag expired after {}ms without activity at ({:.1}, {:.1})",
            state.drag_timeout_ms,
            position.x,
            position.y
        );
        state.events.push(CageEvent::DragExpired { position });
    }

    match input {
        CageInput::Sensor { reading } => handle_sensor(state, reading),
        CageInput::Gesture { gesture } => handle_gesture(state, gesture, now_ms),
        CageInput::Resize { width, height } => handle_resize(state, *width, *height),
        CageInput::Frame => {}
    }
}

fn handle_sensor(state: &mut CageState, reading: &MotionReading) {
    if !state.arbiter.accepts_sensor() {
        log::trace!("Sensor tick suppressed during drag");
        state.events.push(CageEvent::SensorSuppressed);
        return;
    }
    let delta = reading.to_delta(state.multiplier);
    state.apply_delta(delta);
}

fn handle_gesture(state: &mut CageState, gesture: &GestureEvent, now_ms: f64) {
    match gesture {
        GestureEvent::Start => {
            let anchor = state.position();
            if state.is_dragging() {
                log::debug!("Drag restarted, re-anchoring");
            }
            state.arbiter.begin_drag(anchor, now_ms);
            log::debug!("Drag started at ({:.1}, {:.1})", anchor.x, anchor.y);
            state.events.push(CageEvent::DragStarted { anchor });
        }
        GestureEvent::Move { translation } => {
            let region = state.region();
            match state.arbiter.drag_to(*translation, &region, now_ms) {
                Some(position) => state.set_position(position),
                None => log::debug!("Drag frame ignored, no active drag"),
            }
        }
        GestureEvent::End => {
            if state.arbiter.end_drag() {
                let position = state.position();
                log::debug!("Drag ended at ({:.1}, {:.1})", position.x, position.y);
                state.events.push(CageEvent::DragEnded { position });
            }
        }
        GestureEvent::Cancel => {
            if state.arbiter.cancel_drag() {
                let position = state.position();
                log::debug!("Drag cancelled at ({:.1}, {:.1})", position.x, position.y);
                state.events.push(CageEvent::DragCancelled { position });
            }
        }
    }
}

fn handle_resize(state: &mut CageState, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        log::warn!("Ignoring invalid viewport size {}x{}", width, height);
        return;
    }
    state.set_viewport(Vec2::new(width, height));
    let region = state.region();
    log::info!(
        "Viewport {}x{}, region x [{}, {}] y [{}, {}]",
        width,
        height,
        region.left,
        region.right,
        region.top,
        region.bottom
    );
}
