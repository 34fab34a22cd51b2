//! Session controller
//!
//! Owns the live game state and the snapshot file. Each tick runs the
//! simulation, then services save/load requests (in any phase), then builds
//! the draw list for the external renderer.

use crate::persistence::{PersistenceError, SaveFile, Snapshot};
use crate::renderer::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Successful persistence operation to acknowledge on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Saved,
    Loaded,
}

/// Everything a tick produced
#[derive(Debug)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Outcome of a save request, if one was made this tick
    pub save: Option<Result<(), PersistenceError>>,
    /// Outcome of a load request, if one was made this tick
    pub load: Option<Result<(), PersistenceError>>,
    pub draw: Vec<DrawCommand>,
}

impl TickReport {
    /// Overlay shown this tick; a load supersedes a save
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        if matches!(self.load, Some(Ok(()))) {
            Some(Acknowledgement::Loaded)
        } else if matches!(self.save, Some(Ok(()))) {
            Some(Acknowledgement::Saved)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    save_file: SaveFile,
}

impl Session {
    pub fn new(state: GameState, save_file: SaveFile) -> Self {
        log::info!(
            "Game initialized with seed: {} (animated: {})",
            state.seed,
            state.is_animated()
        );
        Self { state, save_file }
    }

    /// Build a session from settings; `fallback_seed` is used when none is configured
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        Self::new(
            GameState::new(seed, settings.animated),
            SaveFile::new(settings.save_path.clone()),
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn save_file(&self) -> &SaveFile {
        &self.save_file
    }

    /// Run one frame
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> TickReport {
        let events = tick(&mut self.state, input, dt);
        let save = input.save.then(|| self.save());
        let load = input.load.then(|| self.load());

        let mut report = TickReport {
            events,
            save,
            load,
            draw: Vec::new(),
        };
        report.draw = renderer::frame(&self.state, report.acknowledgement());
        report
    }

    /// Write the current bird, pipe and score to the snapshot file
    pub fn save(&self) -> Result<(), PersistenceError> {
        let result = self.save_file.save(&Snapshot::capture(&self.state));
        match &result {
            Ok(()) => log::info!("Game saved (score {})", self.state.score),
            Err(e) => log::error!("{}", e),
        }
        result
    }

    /// Replace the live game with the snapshot and resume play.
    ///
    /// On any failure the live game is left exactly as it was.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        match self.save_file.load() {
            Ok(snapshot) => {
                snapshot.restore(&mut self.state);
                log::info!("Loaded saved game (score {})", self.state.score);
                Ok(())
            }
            Err(e) => {
                match &e {
                    PersistenceError::FileAbsent { .. } => log::info!("{}", e),
                    _ => log::error!("{}", e),
                }
                Err(e)
            }
        }
    }
}
