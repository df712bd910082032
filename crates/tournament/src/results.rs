//! Tournament results storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::MatchResult;
use crate::standings::{format_table, Standing};

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    /// Event name written into every game
    pub event: String,
    /// Participating strategy ids
    pub participants: Vec<String>,
    /// Configuration used
    pub config: TournamentConfig,
    /// Every match in the order it was played
    pub matches: Vec<MatchEntry>,
    /// Final table, best first
    pub standings: Vec<Standing>,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub round: u32,
    pub white: String,
    pub black: String,
    pub result: MatchResult,
    /// Plies played
    pub moves: usize,
    /// Forfeit description when the match ended on a fault
    pub fault: Option<String>,
    /// PGN file name, absent if writing it failed
    pub pgn_file: Option<String>,
}

impl TournamentSummary {
    pub fn total_points(&self) -> f64 {
        self.standings.iter().map(|s| s.points).sum()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.event));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} round(s), {}s per move, {} ply limit\n\n",
            self.config.rounds, self.config.move_timeout_seconds, self.config.move_limit
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<5} {:<20} vs {:<20} {:<8} {:<22} {:>5}\n",
            "Round", "White", "Black", "Result", "Reason", "Plies"
        ));
        report.push_str(&"-".repeat(86));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<5} {:<20} vs {:<20} {:<8} {:<22} {:>5}\n",
                entry.round,
                entry.white,
                entry.black,
                entry.result.result_code(),
                entry.result.reason.to_string(),
                entry.moves
            ));
        }

        report.push_str("\nStandings:\n");
        report.push_str(&format_table(&self.standings));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
