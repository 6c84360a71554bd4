//! Magic Ball demo entry point
//!
//! Drives a cage with a simulated tilt sensor and scripted touch drags,
//! logging where the ball ends up. Usage: `magic-ball [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Magic Ball (native demo) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => magic_ball::CageSettings::load(std::path::Path::new(&path)),
        None => magic_ball::CageSettings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    demo::run(settings, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library only on wasm; the host page drives `tick` directly
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use magic_ball::CageSettings;
    use magic_ball::sim::{CageInput, CageState, GestureEvent, MotionReading, tick};

    /// Portrait phone viewport (points)
    const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);
    /// Touch frames arrive at ~60 Hz
    const DRAG_FRAME_MS: f64 = 16.0;

    /// Chance that a reading comes back without rotation data
    const MISSING_READING_CHANCE: f64 = 0.1;

    pub fn run(settings: CageSettings, seed: u64) {
        log::info!("Seed {}, settings {:?}", seed, settings);
        log::info!(
            "Sampling every {:?}, ball tween {:?}",
            settings.sensor_interval(),
            settings.animation_duration()
        );
        let mut state = CageState::new(VIEWPORT, &settings);
        let script = build_script(&settings, seed);

        for (now_ms, input) in &script {
            tick(&mut state, input, *now_ms);
            let pos = state.position();
            log::debug!("t={:>6.0}ms {:?} -> ({:.1}, {:.1})", now_ms, input, pos.x, pos.y);
            for event in state.drain_events() {
                log::info!("t={:>6.0}ms {:?}", now_ms, event);
            }
        }

        let pos = state.position();
        let screen = state.screen_position();
        println!(
            "Final position ({:.1}, {:.1}), on screen ({:.1}, {:.1}), dragging: {}",
            pos.x,
            pos.y,
            screen.x,
            screen.y,
            state.is_dragging()
        );
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize state: {}", e),
        }
    }

    /// Timeline of sensor ticks and gestures, sorted by time
    fn build_script(settings: &CageSettings, seed: u64) -> Vec<(f64, CageInput)> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let refresh = settings.refresh_ms as f64;
        let end_ms = 3.0 * settings.drag_timeout_ms.max(2000.0) + 4000.0;
        let mut script: Vec<(f64, CageInput)> = Vec::new();

        // Sensor feed for the whole session
        let mut t = 0.0;
        while t < end_ms {
            let reading = if rng.random_bool(MISSING_READING_CHANCE) {
                MotionReading::default()
            } else {
                MotionReading::new(rng.random_range(-0.3..0.3), rng.random_range(-0.3..0.3))
            };
            script.push((t, reading.into()));
            t += refresh;
        }

        // A normal drag toward the upper right
        let drag_start = 1500.0;
        script.push((drag_start, GestureEvent::Start.into()));
        for i in 1..=30 {
            let translation = Vec2::new(i as f32 * 6.0, -(i as f32) * 9.0);
            script.push((
                drag_start + i as f64 * DRAG_FRAME_MS,
                GestureEvent::Move { translation }.into(),
            ));
        }
        script.push((drag_start + 31.0 * DRAG_FRAME_MS, GestureEvent::End.into()));

        // Rotate to landscape
        script.push((
            drag_start + 1500.0,
            CageInput::Resize {
                width: VIEWPORT.y,
                height: VIEWPORT.x,
            },
        ));

        // A drag the host never finishes; the watchdog has to clear it
        let abandoned = drag_start + 2000.0;
        script.push((abandoned, GestureEvent::Start.into()));
        script.push((
            abandoned + DRAG_FRAME_MS,
            GestureEvent::Move {
                translation: Vec2::new(-40.0, 25.0),
            }
            .into(),
        ));

        // Stable sort keeps gestures after the sensor tick at the same instant
        script.sort_by(|a, b| a.0.total_cmp(&b.0));
        script
    }
}
