//! Startup configuration
//!
//! Read once from an optional JSON file. Settings are never written back;
//! menu changes last for the session only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Difficulty;

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "LANE_RUSH_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preselected on the menu
    pub difficulty: Difficulty,
    pub sound_on: bool,
    /// Cosmetic dark palette
    pub night_mode: bool,
    /// Where the best score lives
    pub high_score_path: PathBuf,
    /// Fixed RNG seed for reproducible runs; seeded from the clock when absent
    pub seed: Option<u64>,
    /// Capacity of the shared event queue
    pub event_queue_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound_on: true,
            night_mode: false,
            high_score_path: PathBuf::from("highscore.dat"),
            seed: None,
            event_queue_capacity: 8,
        }
    }
}

impl Settings {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Settings path from the first CLI argument, else the environment
    pub fn locate(arg: Option<String>) -> Option<PathBuf> {
        arg.or_else(|| std::env::var(CONFIG_ENV).ok())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    fn sanitized(mut self) -> Self {
        if self.event_queue_capacity == 0 {
            log::warn!("event_queue_capacity must be positive, using 8");
            self.event_queue_capacity = 8;
        }
        self
    }
}
