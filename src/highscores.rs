//! High score persistence
//!
//! The best score is a single little-endian `u32` in a 4-byte file. No
//! header, no versioning, no backup: saving truncates and rewrites in place.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or writing the high score file
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("'{path}' holds {len} bytes, expected 4")]
    ShortRead { path: PathBuf, len: usize },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// File-backed high score store
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. A missing file is `Ok(None)`.
    pub fn try_load(&self) -> Result<Option<u32>, PersistenceError> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Open {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut buf = Vec::with_capacity(4);
        file.read_to_end(&mut buf)
            .map_err(|source| PersistenceError::Read {
                path: self.path.clone(),
                source,
            })?;
        let bytes: [u8; 4] = buf
            .get(..4)
            .and_then(|b| b.try_into().ok())
            .ok_or(PersistenceError::ShortRead {
                path: self.path.clone(),
                len: buf.len(),
            })?;
        Ok(Some(u32::from_le_bytes(bytes)))
    }

    /// Stored score, or 0 when nothing usable is on disk
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Ok(None) => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("High score unavailable: {}", e);
                0
            }
        }
    }

    /// Create-or-truncate and write the score
    pub fn try_save(&self, score: u32) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| PersistenceError::Open {
                path: self.path.clone(),
                source,
            })?;
        }
        let mut file = File::create(&self.path).map_err(|source| PersistenceError::Open {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(&score.to_le_bytes())
            .map_err(|source| PersistenceError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Best-effort save; failures are logged and otherwise ignored
    pub fn save(&self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("High score not saved: {}", e),
        }
    }
}
