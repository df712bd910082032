//! Turns finished matches into PGN files.

use std::fs;
use std::path::{Path, PathBuf};

use chess_core::{export_game, Move, Position};
use chrono::NaiveDate;
use tracing::debug;

use crate::error::TournamentError;
use crate::match_runner::{MatchResult, PlayedMatch};

/// Immutable record of one finished match, ready to export.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    event: String,
    site: String,
    date: NaiveDate,
    round: u32,
    white: String,
    black: String,
    result: MatchResult,
    time_control: String,
    start: Position,
    moves: Vec<Move>,
}

/// Keeps ASCII letters, digits and `_-.`; everything else becomes `_`.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl MatchRecord {
    pub fn new(
        played: &PlayedMatch,
        event: &str,
        site: &str,
        date: NaiveDate,
        round: u32,
        move_timeout_seconds: f64,
    ) -> Self {
        Self {
            event: event.to_string(),
            site: site.to_string(),
            date,
            round,
            white: played.white.clone(),
            black: played.black.clone(),
            result: played.result,
            time_control: format!("{move_timeout_seconds}s"),
            start: played.start.clone(),
            moves: played.moves.clone(),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// PGN tag pairs in output order.
    pub fn headers(&self) -> Vec<(String, String)> {
        [
            ("Event", self.event.clone()),
            ("Site", self.site.clone()),
            ("Date", self.date.format("%Y.%m.%d").to_string()),
            ("Round", self.round.to_string()),
            ("White", self.white.clone()),
            ("Black", self.black.clone()),
            ("Result", self.result.result_code().to_string()),
            ("WhiteType", "computer".to_string()),
            ("BlackType", "computer".to_string()),
            ("Termination", self.result.reason.to_string()),
            ("TimeControl", self.time_control.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    pub fn to_pgn(&self) -> String {
        export_game(
            &self.headers(),
            &self.start,
            &self.moves,
            self.result.result_code(),
        )
    }

    /// `R{round}_{white}_vs_{black}_{outcome}_{reason}.pgn`, sanitised.
    pub fn file_name(&self) -> String {
        let raw = format!(
            "R{}_{}_vs_{}_{}_{}.pgn",
            self.round,
            self.white,
            self.black,
            self.result.outcome_label(),
            self.result.reason
        );
        sanitize_file_name(&raw)
    }
}

/// Writes match records into one directory.
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    output_dir: PathBuf,
}

impl ResultRecorder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn save(&self, record: &MatchRecord) -> Result<PathBuf, TournamentError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| TournamentError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.output_dir.join(record.file_name());
        fs::write(&path, record.to_pgn()).map_err(|source| TournamentError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "saved game");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod recorder_tests;
