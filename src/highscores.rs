//! Best-score persistence
//!
//! The only persisted state in the whole game: one best-score integer per
//! mode, stored as a small JSON file. Load failures degrade to an empty
//! record with a logged warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::GameMode;

/// Default file name, relative to the working directory
pub const DEFAULT_PATH: &str = "sky_splat_scores.json";

/// Best score per game mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestScores {
    #[serde(default)]
    pub arcade: u64,
    #[serde(default)]
    pub chaos: u64,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Arcade => self.arcade,
            GameMode::Chaos => self.chaos,
        }
    }

    /// Keep the max of the stored best and `score`. Returns true when the
    /// score is a new best.
    pub fn record(&mut self, mode: GameMode, score: u64) -> bool {
        let slot = match mode {
            GameMode::Arcade => &mut self.arcade,
            GameMode::Chaos => &mut self.chaos,
        };
        if score > *slot {
            *slot = score;
            return true;
        }
        false
    }

    /// Load from disk, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("loaded best scores from {}", path.display());
                    scores
                }
                Err(err) => {
                    log::warn!("corrupt best-score file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no best-score file at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
