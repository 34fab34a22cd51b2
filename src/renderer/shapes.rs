//! Draw list generation for the bird, pipe and text overlays

use super::command::{DrawCommand, TextAnchor, colors};
use crate::consts::*;
use crate::session::Acknowledgement;
use crate::sim::{Bird, GamePhase, GameState, Pipe};

const PROMPT_SIZE: u32 = 20;
const TITLE_SIZE: u32 = 40;

/// Bird as a sprite frame (animated) or a filled circle (plain)
pub fn bird(bird: &Bird) -> DrawCommand {
    match bird.frame {
        Some(frame) => DrawCommand::Sprite {
            position: bird.pos,
            frame,
            scale: SPRITE_SCALE,
        },
        None => DrawCommand::Circle {
            center: bird.pos,
            radius: BIRD_RADIUS,
            color: colors::BIRD,
        },
    }
}

/// Upper and lower pipe walls
pub fn pipe(pipe: &Pipe) -> [DrawCommand; 2] {
    let rect = |(x, y, w, h): (f32, f32, f32, f32)| DrawCommand::Rect {
        x,
        y,
        w,
        h,
        color: colors::PIPE,
    };
    [rect(pipe.top_wall()), rect(pipe.bottom_wall())]
}

fn centered(text: &str, y: f32, size: u32, color: [f32; 4]) -> DrawCommand {
    DrawCommand::Text {
        text: text.to_string(),
        x: SCREEN_WIDTH / 2.0,
        y,
        size,
        color,
        anchor: TextAnchor::Center,
    }
}

pub fn score(score: u64) -> DrawCommand {
    DrawCommand::Text {
        text: format!("Score: {}", score),
        x: 10.0,
        y: 10.0,
        size: PROMPT_SIZE,
        color: colors::TEXT,
        anchor: TextAnchor::Left,
    }
}

/// Game over title and prompts; the animated variant also advertises save/load
pub fn game_over(animated: bool) -> Vec<DrawCommand> {
    let mid = SCREEN_HEIGHT / 2.0;
    let mut out = vec![
        centered("Game Over!", mid - 50.0, TITLE_SIZE, colors::GAME_OVER),
        centered("Press 'R' to restart", mid, PROMPT_SIZE, colors::TEXT),
    ];
    if animated {
        out.push(centered("Press 'S' to save", mid + 30.0, PROMPT_SIZE, colors::TEXT));
        out.push(centered("Press 'L' to load", mid + 60.0, PROMPT_SIZE, colors::TEXT));
    }
    out
}

/// Save/load acknowledgement, placed below the game over prompts
pub fn acknowledgement(ack: Acknowledgement, animated: bool) -> DrawCommand {
    let offset = if animated { 90.0 } else { 50.0 };
    let text = match ack {
        Acknowledgement::Saved => "Game Saved!",
        Acknowledgement::Loaded => "Game Loaded!",
    };
    centered(text, SCREEN_HEIGHT / 2.0 + offset, PROMPT_SIZE, colors::ACK)
}

/// Everything to draw for one frame
pub fn frame(state: &GameState, ack: Option<Acknowledgement>) -> Vec<DrawCommand> {
    let animated = state.is_animated();
    let mut out = vec![DrawCommand::Clear {
        color: colors::BACKGROUND,
    }];

    match state.phase {
        GamePhase::GameOver => out.extend(game_over(animated)),
        GamePhase::Playing => {
            out.push(bird(&state.bird));
            out.extend(pipe(&state.pipe));
            out.push(score(state.score));
        }
    }

    if let Some(ack) = ack {
        out.push(acknowledgement(ack, animated));
    }
    out
}
