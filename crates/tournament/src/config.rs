//! Tournament configuration, read from TOML.
//!
//! ```toml
//! rounds = 2
//! move_timeout_seconds = 0.5
//! move_limit = 500
//! strategies = ["random", "strategic", "spectral"]
//! seed = 42
//! output_dir = "tournament_pgns"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_core::Position;
use serde::{Deserialize, Serialize};
use strategies::StrategyRegistry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rounds must be at least 1")]
    Rounds,
    #[error("move timeout must be a positive number of seconds, got {0}")]
    MoveTimeout(f64),
    #[error("move limit must be at least 1 ply")]
    MoveLimit,
    #[error("a tournament needs at least two strategies, got {0}")]
    TooFewStrategies(usize),
    #[error("strategy '{0}' is listed twice")]
    DuplicateStrategy(String),
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
    #[error("invalid start_fen: {0}")]
    StartFen(#[from] chess_core::FenError),
}

/// Longest accepted per-move budget, one day.
pub const MAX_MOVE_TIMEOUT_SECONDS: f64 = 86_400.0;

/// Checks the per-match settings shared by tournaments and single games.
///
/// The timeout must be finite, positive and at most
/// [`MAX_MOVE_TIMEOUT_SECONDS`]; `Duration::from_secs_f64` panics outside
/// its range.
pub fn check_match_limits(move_timeout_seconds: f64, move_limit: usize) -> Result<(), ConfigError> {
    let t = move_timeout_seconds;
    if !(t.is_finite() && t > 0.0 && t <= MAX_MOVE_TIMEOUT_SECONDS) {
        return Err(ConfigError::MoveTimeout(t));
    }
    if move_limit == 0 {
        return Err(ConfigError::MoveLimit);
    }
    Ok(())
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    /// Full round robins to play
    pub rounds: u32,
    /// Wall-clock budget for a single decision
    pub move_timeout_seconds: f64,
    /// Plies after which a match is drawn
    pub move_limit: usize,
    /// Strategy ids; empty means every registered strategy
    pub strategies: Vec<String>,
    /// Master seed for reproducible runs
    pub seed: Option<u64>,
    /// Directory that receives the PGN files and the summary
    pub output_dir: PathBuf,
    /// Event header; defaults to a timestamped name
    pub event: Option<String>,
    pub site: String,
    /// Play every match from this position instead of the initial one
    pub start_fen: Option<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            move_timeout_seconds: 0.5,
            move_limit: 500,
            strategies: Vec::new(),
            seed: None,
            output_dir: PathBuf::from("tournament_pgns"),
            event: None,
            site: "Local Tournament".to_string(),
            start_fen: None,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn move_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.move_timeout_seconds)
    }

    /// Strategy ids taking part, in registration order when none are listed.
    pub fn participants(&self, registry: &StrategyRegistry) -> Vec<String> {
        if self.strategies.is_empty() {
            registry.ids().into_iter().map(str::to_string).collect()
        } else {
            self.strategies.clone()
        }
    }

    pub fn start_position(&self) -> Result<Position, ConfigError> {
        match &self.start_fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }

    /// Checks every field against the registry the tournament will use.
    pub fn validate(&self, registry: &StrategyRegistry) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Rounds);
        }
        check_match_limits(self.move_timeout_seconds, self.move_limit)?;

        let ids = self.participants(registry);
        if ids.len() < 2 {
            return Err(ConfigError::TooFewStrategies(ids.len()));
        }
        let mut seen = HashSet::new();
        for id in &ids {
            if !registry.contains(id) {
                return Err(ConfigError::UnknownStrategy(id.clone()));
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateStrategy(id.clone()));
            }
        }

        self.start_position()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
