//! Edge Walker headless runner
//!
//! Drives a scripted session against a synthetic 60 Hz clock: the pointer
//! orbits the playfield center and the walker fires every few frames. Useful
//! for eyeballing balance changes from a config file without a renderer.
//!
//! Usage: `edge-walker [config.json] [max_seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use edge_walker::sim::{GameEvent, GameState, tick};
    use edge_walker::{GameConfig, InputState};

    /// Synthetic frame period (nanoseconds)
    const FRAME_NS: i64 = 16_666_667;
    /// Fire every N frames
    const FIRE_EVERY: u64 = 12;
    /// Rounds to play before stopping
    const ROUNDS: u32 = 2;

    env_logger::init();
    log::info!("Edge Walker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            None
        }
    });
    let max_seconds: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    let config = GameConfig::load_or_default(json.as_deref());
    let center = config.bounds().center();
    let orbit = config.width.min(config.height) * 0.35;

    let mut now: i64 = 0;
    let mut frame: u64 = 0;
    let mut state = GameState::new(config, now);
    let mut input = InputState::new();
    let mut round = 1;
    let mut shots = 0u64;
    let deadline = max_seconds.saturating_mul(1_000_000_000);

    while now < deadline {
        // Scripted "player": circle the center, fire periodically
        let angle = frame as f64 * 0.01;
        input.pointer_moved(center.x + orbit * angle.cos(), center.y + orbit * angle.sin());
        if frame.is_multiple_of(FIRE_EVERY) {
            input.shoot_pressed();
        }

        let snapshot = tick(&mut state, &input.take_tick_input(), now);
        for event in &snapshot.events {
            match event {
                GameEvent::Shot { .. } => shots += 1,
                GameEvent::GameOver { score, .. } => {
                    println!(
                        "Round {}: {} after {:.1}s",
                        round,
                        snapshot.score_label(),
                        now as f64 / 1e9
                    );
                    log::debug!("Final frame: {} sprites", snapshot.sprites.len());
                    if *score > 0 {
                        log::info!("Scored {}", score);
                    }
                }
                _ => {}
            }
        }

        if state.is_game_over() {
            if round >= ROUNDS {
                break;
            }
            round += 1;
            input.restart_pressed();
        }

        now += FRAME_NS;
        frame += 1;
    }

    println!(
        "Played {} round(s), {} ticks, {} shots, best score {}",
        round, state.time_ticks, shots, state.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive `edge_walker::sim::tick` from their own frame callback
}
