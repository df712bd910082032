use chess_core::{file_of, rank_of, Move, PieceKind, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{choose, legal_moves};

/// Copies the shape of the opponent's last move with the same kind of piece.
///
/// Preference order: same piece kind with the same (possibly mirrored)
/// offset, then any move by that piece kind, then anything.
#[derive(Debug, Clone)]
pub struct MimicStrategy {
    rng: ChaCha8Rng,
}

impl MimicStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

fn offset(mv: Move) -> (i8, i8) {
    (
        file_of(mv.to) - file_of(mv.from),
        rank_of(mv.to) - rank_of(mv.from),
    )
}

/// Best guess at the piece kind behind a move from its shape alone.
fn kind_from_shape(df: i8, dr: i8) -> Option<PieceKind> {
    let (af, ar) = (df.abs(), dr.abs());
    if af <= 1 && ar <= 1 {
        Some(if dr != 0 {
            PieceKind::Pawn
        } else {
            PieceKind::King
        })
    } else if (af == 1 && ar == 2) || (af == 2 && ar == 1) {
        Some(PieceKind::Knight)
    } else if af == ar {
        Some(PieceKind::Bishop)
    } else if df == 0 || dr == 0 {
        Some(PieceKind::Rook)
    } else {
        None
    }
}

impl Strategy for MimicStrategy {
    fn name(&self) -> &str {
        "Mimic Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let Some(last) = pos.last_move() else {
            return choose(&mut self.rng, &moves);
        };

        let (df, dr) = offset(last);
        let kind = match pos.piece_at(last.to) {
            Some(pc) => Some(pc.kind),
            None => kind_from_shape(df, dr),
        };

        let same_kind: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| pos.piece_at(m.from).map(|pc| pc.kind) == kind)
            .collect();
        let mirrored: Vec<Move> = same_kind
            .iter()
            .copied()
            .filter(|&m| {
                let (mf, mr) = offset(m);
                mf.abs() == df.abs() && mr.abs() == dr.abs()
            })
            .collect();

        if !mirrored.is_empty() {
            choose(&mut self.rng, &mirrored)
        } else if !same_kind.is_empty() {
            choose(&mut self.rng, &same_kind)
        } else {
            choose(&mut self.rng, &moves)
        }
    }
}

#[cfg(test)]
#[path = "mimic_tests.rs"]
mod mimic_tests;
