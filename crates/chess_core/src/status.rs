//! Game-over detection.
//!
//! Only conditions that end the game automatically are reported: there is no
//! claiming, so the fifty-move rule and threefold repetition never apply. The
//! seventy-five-move rule and fivefold repetition do.

use std::fmt;

use crate::board::Position;
use crate::types::{is_light_square, Color, PieceKind};

/// Halfmove clock value at which the game is drawn outright.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
pub const FIVEFOLD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "seventy-five moves",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for every draw.
    pub winner: Option<Color>,
}

impl Position {
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Neither side can ever mate: no pawns, rooks or queens remain, and the
    /// minor pieces are either at most one knight or bishop in total, or only
    /// bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        for c in Color::ALL {
            for k in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen] {
                if !self.pieces(c, k).is_empty() {
                    return false;
                }
            }
        }

        let knights = self.pieces(Color::White, PieceKind::Knight)
            | self.pieces(Color::Black, PieceKind::Knight);
        let bishops = self.pieces(Color::White, PieceKind::Bishop)
            | self.pieces(Color::Black, PieceKind::Bishop);

        if knights.popcount() + bishops.popcount() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }
        let light = bishops.squares().filter(|&s| is_light_square(s)).count() as u32;
        light == 0 || light == bishops.popcount()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= FIVEFOLD
    }

    /// Checked in order: checkmate, insufficient material, stalemate,
    /// seventy-five moves, fivefold repetition. A mate delivered on the
    /// 150th quiet ply is still a mate.
    pub fn outcome(&self) -> Option<Outcome> {
        let no_moves = self.legal_moves().is_empty();
        if no_moves && self.is_check() {
            return Some(Outcome {
                termination: Termination::Checkmate,
                winner: Some(self.side_to_move.other()),
            });
        }
        let termination = if self.is_insufficient_material() {
            Termination::InsufficientMaterial
        } else if no_moves {
            Termination::Stalemate
        } else if self.is_seventyfive_moves() {
            Termination::SeventyFiveMoves
        } else if self.is_fivefold_repetition() {
            Termination::FivefoldRepetition
        } else {
            return None;
        };
        Some(Outcome {
            termination,
            winner: None,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}
