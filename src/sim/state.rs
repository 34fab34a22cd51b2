//! Game state and core simulation types
//!
//! Bird, pipe and score are the persisted part of the state; phase, RNG and
//! the animation clock are live-only.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::AnimationClock;
use crate::consts::*;
use crate::persistence::xy;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or load
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Bird fell below the bottom of the screen
    OutOfBounds,
    /// Bird touched a pipe wall
    PipeCollision,
}

/// Outcome of one physics integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    InBounds,
    /// Bird ended the step below the screen; position is left unclamped
    OutOfBounds,
}

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    #[serde(rename = "Position", with = "xy")]
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    #[serde(rename = "Speed")]
    pub speed: f32,
    /// Animation frame, present only in the animated variant
    #[serde(rename = "Frame", default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<u32>,
}

impl Bird {
    pub fn new(animated: bool) -> Self {
        Self {
            pos: Vec2::new(BIRD_X, SCREEN_HEIGHT / 2.0),
            speed: 0.0,
            frame: animated.then_some(0),
        }
    }

    /// Override vertical velocity with the jump speed
    pub fn jump(&mut self) {
        self.speed = JUMP_SPEED;
    }

    /// Apply gravity then move by the updated velocity.
    ///
    /// Positions above the top are clamped to 0 without touching velocity.
    pub fn integrate(&mut self, dt: f32) -> Integration {
        self.speed += GRAVITY * dt;
        self.pos.y += self.speed * dt;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y > SCREEN_HEIGHT {
            return Integration::OutOfBounds;
        }
        Integration::InBounds
    }
}

/// The single active obstacle (upper and lower wall around a gap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    #[serde(rename = "Position", with = "xy")]
    pub pos: Vec2,
    /// Vertical center of the gap
    #[serde(rename = "GapY")]
    pub gap_y: f32,
}

impl Pipe {
    /// Place a new pipe just past the right edge with a random gap.
    ///
    /// The gap center is uniform over `[PIPE_GAP/2, SCREEN_HEIGHT - PIPE_GAP/2]`.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let span = (SCREEN_HEIGHT - PIPE_GAP) as u32;
        let gap_y = rng.random_range(0..=span) as f32 + PIPE_GAP / 2.0;
        Self {
            pos: Vec2::new(SCREEN_WIDTH, 0.0),
            gap_y,
        }
    }

    /// Scroll left
    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= PIPE_SPEED * dt;
    }

    /// True once the pipe has fully left the screen
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -PIPE_WIDTH
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_y - PIPE_GAP / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + PIPE_GAP / 2.0
    }

    /// Upper wall as (x, y, width, height)
    pub fn top_wall(&self) -> (f32, f32, f32, f32) {
        (self.pos.x, 0.0, PIPE_WIDTH, self.gap_top())
    }

    /// Lower wall as (x, y, width, height)
    pub fn bottom_wall(&self) -> (f32, f32, f32, f32) {
        let top = self.gap_bottom();
        (self.pos.x, top, PIPE_WIDTH, SCREEN_HEIGHT - top)
    }
}

/// Complete live game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub bird: Bird,
    pub pipe: Pipe,
    pub score: u64,
    pub phase: GamePhase,
    /// Set when the run ends, cleared on reset/load
    pub game_over_reason: Option<GameOverReason>,
    /// Present only in the animated variant
    pub animation: Option<AnimationClock>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, animated: bool) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pipe = Pipe::spawn(&mut rng);
        Self {
            seed,
            bird: Bird::new(animated),
            pipe,
            score: 0,
            phase: GamePhase::Playing,
            game_over_reason: None,
            animation: animated.then(AnimationClock::default),
            rng,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// Fresh bird, fresh pipe, zero score, back to playing.
    ///
    /// The animation clock keeps its accumulated time.
    pub fn reset(&mut self) {
        self.bird = Bird::new(self.is_animated());
        self.respawn_pipe();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.game_over_reason = None;
    }

    /// Replace the pipe with a newly spawned one
    pub fn respawn_pipe(&mut self) {
        self.pipe = Pipe::spawn(&mut self.rng);
    }

    pub fn end_run(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::GameOver;
        self.game_over_reason = Some(reason);
    }
}
