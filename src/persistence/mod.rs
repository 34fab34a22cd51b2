//! Save/load persistence
//!
//! Features:
//! - Human-readable JSON snapshot (bird, pipe, score)
//! - Whole-file overwrite on every save
//! - Distinguishable missing-file and decode outcomes
//!
//! A crash mid-write can leave a truncated file; the next load reports it as
//! a decode failure.

pub mod snapshot;
pub mod xy;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use snapshot::Snapshot;

/// Why a snapshot file could not be turned into a `Snapshot`
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("frame {frame} outside 0..{frame_count}")]
    FrameOutOfRange { frame: u32, frame_count: u32 },
}

/// Persistence failures. All are recoverable; the live game is never touched.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Error saving game: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No save file found at {}", path.display())]
    FileAbsent { path: PathBuf },
    #[error("Error loading game from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// A snapshot file on disk
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::new(crate::consts::SAVE_FILE)
    }
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode the snapshot and overwrite the file with it
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let bytes = snapshot.to_json().map_err(PersistenceError::Encode)?;
        fs::write(&self.path, bytes).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Read and decode the snapshot file
    pub fn load(&self) -> Result<Snapshot, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::FileAbsent {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(self.decode_error(e.into())),
        };
        Snapshot::from_json(&bytes).map_err(|source| self.decode_error(source))
    }

    fn decode_error(&self, source: DecodeError) -> PersistenceError {
        PersistenceError::Decode {
            path: self.path.clone(),
            source,
        }
    }
}
