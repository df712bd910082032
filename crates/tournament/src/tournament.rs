//! Round-robin scheduler.
//!
//! Every ordered pair of distinct participants meets once per round, so `k`
//! strategies over `r` rounds play `r * k * (k - 1)` matches. Matches run one
//! after another; a strategy that faults only loses its own match.

use std::fs;
use std::path::PathBuf;

use chess_core::Strategy;
use chrono::Local;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strategies::{RegistryError, StrategyRegistry};
use tracing::{info, warn};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchRunner};
use crate::recorder::{MatchRecord, ResultRecorder};
use crate::results::{MatchEntry, TournamentSummary};
use crate::standings::Standings;

pub const SUMMARY_FILE: &str = "summary.json";

/// One scheduled game, by strategy id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub round: u32,
    pub white: String,
    pub black: String,
}

/// All pairings in play order: round by round, white-major.
pub fn schedule(ids: &[String], rounds: u32) -> Vec<Pairing> {
    let per_round = ids.len() * ids.len().saturating_sub(1);
    let mut pairings = Vec::with_capacity(rounds as usize * per_round);
    for round in 1..=rounds {
        for white in ids {
            for black in ids {
                if white != black {
                    pairings.push(Pairing {
                        round,
                        white: white.clone(),
                        black: black.clone(),
                    });
                }
            }
        }
    }
    pairings
}

pub struct Tournament {
    registry: StrategyRegistry,
    config: TournamentConfig,
}

impl Tournament {
    /// Fails if `config` does not validate against `registry`.
    pub fn new(
        registry: StrategyRegistry,
        config: TournamentConfig,
    ) -> Result<Self, TournamentError> {
        config.validate(&registry)?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn summary_path(&self) -> PathBuf {
        self.config.output_dir.join(SUMMARY_FILE)
    }

    fn instantiate(
        &self,
        id: &str,
        seeds: &mut Option<ChaCha8Rng>,
    ) -> Result<Box<dyn Strategy>, RegistryError> {
        match seeds {
            Some(master) => self.registry.create_seeded(id, master.gen()),
            None => self.registry.create(id),
        }
    }

    /// Plays the whole schedule, writes one PGN per match plus the JSON
    /// summary, and returns the summary.
    pub fn run(&self) -> Result<TournamentSummary, TournamentError> {
        let ids = self.config.participants(&self.registry);
        let mut names = Vec::with_capacity(ids.len());
        for id in &ids {
            names.push(self.registry.display_name(id)?.to_string());
        }
        let mut standings = Standings::new(
            ids.iter()
                .map(String::as_str)
                .zip(names.iter().map(String::as_str)),
        );

        let runner = MatchRunner::new(MatchConfig {
            move_timeout: self.config.move_timeout(),
            move_limit: self.config.move_limit,
            start: self.config.start_position()?,
        });
        let recorder = ResultRecorder::new(&self.config.output_dir);
        let now = Local::now();
        let event = self
            .config
            .event
            .clone()
            .unwrap_or_else(|| format!("Chess Bot Tournament {}", now.format("%Y-%m-%d %H:%M")));
        let date = now.date_naive();
        let mut seeds = self.config.seed.map(ChaCha8Rng::seed_from_u64);

        let pairings = schedule(&ids, self.config.rounds);
        info!(
            event = %event,
            strategies = ids.len(),
            rounds = self.config.rounds,
            matches = pairings.len(),
            "starting tournament"
        );

        let mut matches = Vec::with_capacity(pairings.len());
        let mut current_round = 0;
        for (n, pairing) in pairings.iter().enumerate() {
            if pairing.round != current_round {
                current_round = pairing.round;
                info!(round = current_round, "round started");
            }

            let white = self.instantiate(&pairing.white, &mut seeds)?;
            let black = self.instantiate(&pairing.black, &mut seeds)?;
            let played = runner.play(white, black)?;

            standings.record(&pairing.white, &pairing.black, played.result.winner);
            info!(
                game = n + 1,
                of = pairings.len(),
                round = pairing.round,
                white = %played.white,
                black = %played.black,
                result = played.result.result_code(),
                reason = %played.result.reason,
                plies = played.moves.len(),
                "match finished"
            );

            let record = MatchRecord::new(
                &played,
                &event,
                &self.config.site,
                date,
                pairing.round,
                self.config.move_timeout_seconds,
            );
            let pgn_file = match recorder.save(&record) {
                Ok(path) => path.file_name().map(|f| f.to_string_lossy().into_owned()),
                Err(e) => {
                    warn!(error = %e, "could not save game record");
                    None
                }
            };

            matches.push(MatchEntry {
                round: pairing.round,
                white: pairing.white.clone(),
                black: pairing.black.clone(),
                result: played.result,
                moves: played.moves.len(),
                fault: played.fault().map(|(side, fault)| format!("{side}: {fault}")),
                pgn_file,
            });
        }

        let summary = TournamentSummary {
            event,
            participants: ids,
            config: self.config.clone(),
            matches,
            standings: standings.ranked(),
        };

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| TournamentError::Io {
            path: dir.clone(),
            source,
        })?;
        summary.save(&self.summary_path())?;
        info!(path = %self.summary_path().display(), "tournament complete");
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
