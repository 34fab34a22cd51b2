//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame time supplied by the caller
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod animation;
pub mod collision;
pub mod state;
pub mod tick;

pub use animation::AnimationClock;
pub use collision::bird_pipe_collision;
pub use state::{Bird, GameOverReason, GamePhase, GameState, Integration, Pipe};
pub use tick::{GameEvent, TickInput, tick};
