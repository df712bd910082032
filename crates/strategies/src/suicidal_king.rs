use chess_core::{Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{choose, choose_preferring, legal_moves};

/// Walks its king towards danger.
///
/// Among king moves it picks the destination the most enemy pieces attack.
/// With no king move available it plays something that does not check the
/// opponent, so as not to provoke a reply away from its king.
#[derive(Debug, Clone)]
pub struct SuicidalKingStrategy {
    rng: ChaCha8Rng,
}

impl SuicidalKingStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for SuicidalKingStrategy {
    fn name(&self) -> &str {
        "Suicidal King Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let moves = legal_moves(pos)?;
        let me = pos.side_to_move;
        let Some(king) = pos.king_square(me) else {
            return choose(&mut self.rng, &moves);
        };

        let king_moves: Vec<Move> = moves.iter().copied().filter(|m| m.from == king).collect();
        if king_moves.is_empty() {
            if pos.is_check() {
                return choose(&mut self.rng, &moves);
            }
            let quiet: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|&m| !pos.gives_check(m))
                .collect();
            return choose_preferring(&mut self.rng, &quiet, &moves);
        }

        let attacked = pos.attacked_squares(me.other());
        let mut most_dangerous: Option<(Move, u32)> = None;
        for &mv in king_moves.iter().filter(|m| attacked.contains(m.to)) {
            let danger = pos.attackers(me.other(), mv.to).popcount();
            if most_dangerous.map_or(true, |(_, d)| danger > d) {
                most_dangerous = Some((mv, danger));
            }
        }
        match most_dangerous {
            Some((mv, _)) => Ok(mv),
            None => choose(&mut self.rng, &king_moves),
        }
    }
}

#[cfg(test)]
#[path = "suicidal_king_tests.rs"]
mod suicidal_king_tests;
