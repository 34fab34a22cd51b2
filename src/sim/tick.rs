//! Per-frame simulation tick
//!
//! Advances the game state by one externally supplied frame time. Save and
//! load are not handled here; see `session`.

use super::collision::bird_pipe_collision;
use super::state::{GameOverReason, GamePhase, GameState, Integration};

/// Input commands for a single tick (edge-triggered presses)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (W)
    pub jump: bool,
    /// Restart after game over (R)
    pub restart: bool,
    /// Save snapshot (S)
    pub save: bool,
    /// Load snapshot (L)
    pub load: bool,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The pipe left the screen, a new one spawned and the score went up
    PipeRecycled { score: u64 },
    /// The animation clock stepped to a new frame
    FrameAdvanced { frame: u32 },
    GameOver { reason: GameOverReason },
    Restarted,
}

/// Advance the game state by one frame
///
/// Order while playing: jump, physics, pipe scroll and recycle, collision,
/// animation. An out-of-bounds bird ends the tick immediately.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
            log::info!("Game restarted");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    if input.jump {
        state.bird.jump();
    }

    if state.bird.integrate(dt) == Integration::OutOfBounds {
        game_over(state, GameOverReason::OutOfBounds, &mut events);
        return events;
    }

    state.pipe.advance(dt);
    if state.pipe.is_offscreen() {
        state.respawn_pipe();
        state.score = state.score.saturating_add(1);
        log::debug!("Pipe recycled, score {}", state.score);
        events.push(GameEvent::PipeRecycled { score: state.score });
    }

    if bird_pipe_collision(&state.bird, &state.pipe) {
        game_over(state, GameOverReason::PipeCollision, &mut events);
        return events;
    }

    if let Some(clock) = state.animation.as_mut() {
        let frame = state.bird.frame.get_or_insert(0);
        if clock.accumulate(dt, frame) {
            events.push(GameEvent::FrameAdvanced { frame: *frame });
        }
    }

    events
}

fn game_over(state: &mut GameState, reason: GameOverReason, events: &mut Vec<GameEvent>) {
    state.end_run(reason);
    log::info!("Game over ({:?}) with score {}", reason, state.score);
    events.push(GameEvent::GameOver { reason });
}
