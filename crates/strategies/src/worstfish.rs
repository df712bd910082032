use chess_core::{Color, Move, Position, Strategy, StrategyError};
use rand_chacha::ChaCha8Rng;

use crate::common::{after, choose, legal_moves, worst_by};

/// Score given to a move that mates, so it is never the worst.
const MATE_SCORE: f64 = 1000.0;
const CENTER: [u8; 4] = [27, 28, 35, 36]; // d4 e4 d5 e5

/// Deliberately plays the move that leaves it worst off.
///
/// It still refuses to win by checkmate: a mating move scores high enough
/// that something else is always worse.
#[derive(Debug, Clone)]
pub struct WorstfishStrategy {
    rng: ChaCha8Rng,
}

impl WorstfishStrategy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

/// Rough evaluation of `pos` from `me`'s point of view: material balance,
/// developed minor pieces, central control and enemy pressure on the king.
pub fn evaluate(pos: &Position, me: Color) -> f64 {
    let them = me.other();
    let mut score = pos.material(me) as f64 - pos.material(them) as f64;

    let home: [u8; 4] = match me {
        Color::White => [1, 2, 5, 6],
        Color::Black => [57, 58, 61, 62],
    };
    score += 0.5 * home.iter().filter(|&&s| pos.piece_at(s).is_none()).count() as f64;

    let hit = pos.attacked_squares(me);
    score += 0.3 * CENTER.iter().filter(|&&s| hit.contains(s)).count() as f64;

    if let Some(k) = pos.king_square(me) {
        score -= 0.5 * pos.attackers(them, k).popcount() as f64;
    }
    score
}

impl Strategy for WorstfishStrategy {
    fn name(&self) -> &str {
        "Worstfish Bot"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        let me = pos.side_to_move;
        let moves = legal_moves(pos)?;
        let worst = worst_by(&moves, |m| {
            after(pos, m, |next| {
                if next.is_checkmate() {
                    MATE_SCORE
                } else {
                    evaluate(next, me)
                }
            })
        });
        choose(&mut self.rng, &worst)
    }
}

#[cfg(test)]
#[path = "worstfish_tests.rs"]
mod worstfish_tests;
