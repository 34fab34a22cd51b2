//! Flappy Core - a side-scrolling obstacle-avoidance game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle, collisions, animation)
//! - `session`: Playing/GameOver state machine, save/load servicing
//! - `persistence`: JSON snapshot save/load
//! - `renderer`: Abstract draw directives for an external renderer
//! - `settings`: Driver configuration

pub mod persistence;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use persistence::{PersistenceError, SaveFile, Snapshot};
pub use session::{Session, TickReport};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Target loop cadence, enforced by the external renderer
    pub const TARGET_FPS: u32 = 60;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 400.0;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_SPEED: f32 = -300.0;

    /// Bird column; the world scrolls past it
    pub const BIRD_X: f32 = 100.0;
    /// Visual half-size of the bird, also its collision reach
    pub const BIRD_RADIUS: f32 = 20.0;

    /// Pipe scroll speed (pixels/s)
    pub const PIPE_SPEED: f32 = 200.0;
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Height of the passable opening
    pub const PIPE_GAP: f32 = 150.0;

    /// Seconds between animation frames
    pub const FRAME_INTERVAL: f32 = 0.1;
    /// Frames in the bird flap cycle
    pub const FRAME_COUNT: u32 = 8;
    /// Sprite scale applied by the renderer (7%)
    pub const SPRITE_SCALE: f32 = 0.07;

    /// Default snapshot location
    pub const SAVE_FILE: &str = "savegame.json";
}
