//! Match runner for playing a single game between two strategies

use std::fmt;
use std::time::Duration;

use chess_core::{Color, Move, Position, Strategy, Termination};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MatchFault, TournamentError};
use crate::worker::StrategyWorker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
    MoveLimit,
    Timeout,
    Error,
}

impl From<Termination> for TerminationReason {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Checkmate => TerminationReason::Checkmate,
            Termination::Stalemate => TerminationReason::Stalemate,
            Termination::InsufficientMaterial => TerminationReason::InsufficientMaterial,
            Termination::SeventyFiveMoves => TerminationReason::SeventyFiveMoves,
            Termination::FivefoldRepetition => TerminationReason::FivefoldRepetition,
        }
    }
}

impl From<&MatchFault> for TerminationReason {
    fn from(f: &MatchFault) -> Self {
        match f {
            MatchFault::StrategyTimeout(_) => TerminationReason::Timeout,
            MatchFault::IllegalMoveReturned(_) | MatchFault::StrategyFault(_) => {
                TerminationReason::Error
            }
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::Checkmate => "checkmate",
            TerminationReason::Stalemate => "stalemate",
            TerminationReason::InsufficientMaterial => "insufficient material",
            TerminationReason::SeventyFiveMoves => "seventy-five moves",
            TerminationReason::FivefoldRepetition => "fivefold repetition",
            TerminationReason::MoveLimit => "move limit",
            TerminationReason::Timeout => "timeout",
            TerminationReason::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Winner,
    pub reason: TerminationReason,
}

impl MatchResult {
    /// PGN result token.
    pub fn result_code(&self) -> &'static str {
        match self.winner {
            Winner::White => "1-0",
            Winner::Black => "0-1",
            Winner::Draw => "1/2-1/2",
        }
    }

    /// Short outcome label used in file names.
    pub fn outcome_label(&self) -> &'static str {
        match self.winner {
            Winner::White => "white_wins",
            Winner::Black => "black_wins",
            Winner::Draw => "draw",
        }
    }
}

/// Lifecycle of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    Init,
    InProgress,
    Completed(TerminationReason),
    FaultTerminated {
        reason: TerminationReason,
        offender: Color,
        fault: MatchFault,
    },
}

impl MatchState {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            MatchState::Completed(_) | MatchState::FaultTerminated { .. }
        )
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Hard deadline for each decision
    pub move_timeout: Duration,
    /// Plies after which the game is drawn
    pub move_limit: usize,
    /// Position the game starts from
    pub start: Position,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_timeout: Duration::from_millis(500),
            move_limit: 500,
            start: Position::startpos(),
        }
    }
}

/// A finished game.
#[derive(Debug, Clone)]
pub struct PlayedMatch {
    pub white: String,
    pub black: String,
    pub result: MatchResult,
    pub state: MatchState,
    pub start: Position,
    pub moves: Vec<Move>,
}

impl PlayedMatch {
    /// The side that forfeited and why, if the game ended on a fault.
    pub fn fault(&self) -> Option<(Color, &MatchFault)> {
        match &self.state {
            MatchState::FaultTerminated {
                offender, fault, ..
            } => Some((*offender, fault)),
            _ => None,
        }
    }
}

/// Plays games between strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one game. Each strategy gets its own worker thread for the
    /// duration of the game.
    ///
    /// Strategy misbehaviour never surfaces as an `Err`: it ends the game
    /// with the offender losing. Only failing to start a worker does.
    pub fn play(
        &self,
        white: Box<dyn Strategy>,
        black: Box<dyn Strategy>,
    ) -> Result<PlayedMatch, TournamentError> {
        let mut state = MatchState::Init;
        debug!(?state, "spawning strategy workers");

        let mut white = StrategyWorker::spawn(white).map_err(TournamentError::Spawn)?;
        let mut black = StrategyWorker::spawn(black).map_err(TournamentError::Spawn)?;
        let names = (white.name().to_string(), black.name().to_string());

        let mut pos = self.config.start.clone();
        let mut moves = Vec::new();
        state = MatchState::InProgress;
        debug!(?state, white = %names.0, black = %names.1, "match started");

        let result = loop {
            if let Some(outcome) = pos.outcome() {
                let reason = TerminationReason::from(outcome.termination);
                state = MatchState::Completed(reason);
                break MatchResult {
                    winner: outcome.winner.map_or(Winner::Draw, Winner::from),
                    reason,
                };
            }
            if moves.len() >= self.config.move_limit {
                state = MatchState::Completed(TerminationReason::MoveLimit);
                break MatchResult {
                    winner: Winner::Draw,
                    reason: TerminationReason::MoveLimit,
                };
            }

            let side = pos.side_to_move;
            let worker = match side {
                Color::White => &mut white,
                Color::Black => &mut black,
            };

            let played = worker
                .decide(&pos, self.config.move_timeout)
                .and_then(|mv| Self::validate(&pos, mv));

            match played {
                Ok(mv) => {
                    debug!(ply = moves.len() + 1, strategy = worker.name(), %mv, "move");
                    pos.push(mv);
                    moves.push(mv);
                }
                Err(fault) => {
                    warn!(strategy = worker.name(), %side, %fault, "strategy forfeits");
                    let reason = TerminationReason::from(&fault);
                    state = MatchState::FaultTerminated {
                        reason,
                        offender: side,
                        fault,
                    };
                    break MatchResult {
                        winner: Winner::from(side.other()),
                        reason,
                    };
                }
            }
        };

        debug_assert!(state.is_finished());
        Ok(PlayedMatch {
            white: names.0,
            black: names.1,
            result,
            state,
            start: self.config.start.clone(),
            moves,
        })
    }

    /// The engine's own copy of `mv` if it is legal here.
    fn validate(pos: &Position, mv: Move) -> Result<Move, MatchFault> {
        pos.legal_moves()
            .into_iter()
            .find(|legal| legal.same_squares(&mv))
            .ok_or_else(|| MatchFault::IllegalMoveReturned(mv.to_string()))
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
