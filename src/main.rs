//! Flappy Core entry point
//!
//! Headless driver: runs the game core at a fixed 60 Hz with an autopilot in
//! place of a player, saving halfway through and loading at the end. A real
//! frontend supplies window, input and drawing around the same `Session`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use flappy_core::consts::TARGET_FPS;
use flappy_core::sim::{GameEvent, GamePhase, GameState, TickInput};
use flappy_core::{Session, Settings};

/// 30 seconds of play
const DEMO_TICKS: u32 = TARGET_FPS * 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Core (headless) starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut session = Session::from_settings(&settings, seed);
    let dt = 1.0 / TARGET_FPS as f32;

    let mut runs = 0;
    for i in 0..DEMO_TICKS {
        let state = session.state();
        let input = TickInput {
            jump: autopilot(state),
            restart: state.phase == GamePhase::GameOver,
            save: i == DEMO_TICKS / 2,
            load: i == DEMO_TICKS - 1,
        };

        let report = session.tick(&input, dt);
        for event in &report.events {
            if let GameEvent::GameOver { .. } = event {
                runs += 1;
            }
        }
        log::trace!("tick {}: {} draw commands", i, report.draw.len());
    }

    log::info!(
        "Finished after {} game overs, score {}",
        runs,
        session.state().score
    );
}

/// Tap whenever the bird is falling below the gap center
fn autopilot(state: &GameState) -> bool {
    state.bird.pos.y > state.pipe.gap_y && state.bird.speed > 0.0
}
