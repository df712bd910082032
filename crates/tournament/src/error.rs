//! Error types for the tournament runner.

use std::path::PathBuf;
use std::time::Duration;

use chess_core::FenError;
use strategies::RegistryError;
use thiserror::Error;

use crate::config::ConfigError;

/// Why a strategy forfeited a match. Every fault is final for its match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchFault {
    #[error("returned illegal move {0}")]
    IllegalMoveReturned(String),
    #[error("no move within {0:?}")]
    StrategyTimeout(Duration),
    #[error("strategy failed: {0}")]
    StrategyFault(String),
}

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid start position: {0}")]
    StartPosition(#[from] FenError),
    #[error("failed to start strategy worker: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialise results: {0}")]
    Json(#[from] serde_json::Error),
}
