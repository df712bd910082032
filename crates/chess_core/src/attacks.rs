//! Attack sets for every piece kind, plus the position-level queries built
//! on them (attackers of a square, every square a side hits).
//!
//! Leapers (knight, king, pawn) use tables computed at compile time; sliders
//! walk their rays against the current occupancy.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::types::{Color, PieceKind};

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < deltas.len() {
            let f = file + deltas[i].0;
            let r = rank + deltas[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << ((r * 8 + f) as u32);
            }
            i += 1;
        }
        table[sq] = Bitboard(bits);
        sq += 1;
    }
    table
}

pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
pub static WHITE_PAWN_ATTACKS: [Bitboard; 64] = leaper_table(&[(-1, 1), (1, 1)]);
pub static BLACK_PAWN_ATTACKS: [Bitboard; 64] = leaper_table(&[(-1, -1), (1, -1)]);

#[inline(always)]
pub fn knight_attacks(sq: u8) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: u8) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

/// Squares a pawn of `color` standing on `sq` attacks.
#[inline(always)]
pub fn pawn_attacks(sq: u8, color: Color) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[sq as usize],
        Color::Black => BLACK_PAWN_ATTACKS[sq as usize],
    }
}

/// Walk each ray until it leaves the board or hits an occupied square
/// (which is included, so captures fall out naturally).
pub fn ray_attacks(sq: u8, occupied: Bitboard, dirs: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let f0 = (sq % 8) as i8;
    let r0 = (sq / 8) as i8;
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let target = (r * 8 + f) as u8;
            attacks.insert(target);
            if occupied.contains(target) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &DIAGONAL_DIRS)
}

#[inline]
pub fn rook_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ORTHOGONAL_DIRS)
}

#[inline]
pub fn queen_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

impl Position {
    /// Squares attacked by whatever piece stands on `sq` (empty if none).
    pub fn attacks_from(&self, sq: u8) -> Bitboard {
        let Some(pc) = self.piece_at(sq) else {
            return Bitboard::EMPTY;
        };
        let occupied = self.occupied();
        match pc.kind {
            PieceKind::Pawn => pawn_attacks(sq, pc.color),
            PieceKind::Knight => knight_attacks(sq),
            PieceKind::Bishop => bishop_attacks(sq, occupied),
            PieceKind::Rook => rook_attacks(sq, occupied),
            PieceKind::Queen => queen_attacks(sq, occupied),
            PieceKind::King => king_attacks(sq),
        }
    }

    /// Squares of `by`'s pieces that attack `target`.
    pub fn attackers(&self, by: Color, target: u8) -> Bitboard {
        let occupied = self.occupied();
        let diagonal = self.pieces(by, PieceKind::Bishop) | self.pieces(by, PieceKind::Queen);
        let orthogonal = self.pieces(by, PieceKind::Rook) | self.pieces(by, PieceKind::Queen);

        // A pawn of `by` attacks `target` exactly when a pawn of the other
        // colour on `target` would attack the pawn's square.
        (pawn_attacks(target, by.other()) & self.pieces(by, PieceKind::Pawn))
            | (knight_attacks(target) & self.pieces(by, PieceKind::Knight))
            | (king_attacks(target) & self.pieces(by, PieceKind::King))
            | (bishop_attacks(target, occupied) & diagonal)
            | (rook_attacks(target, occupied) & orthogonal)
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        !self.attackers(by, target).is_empty()
    }

    /// Every square attacked by at least one piece of `by`.
    pub fn attacked_squares(&self, by: Color) -> Bitboard {
        let mut all = Bitboard::EMPTY;
        for sq in self.occupied_by(by) {
            all |= self.attacks_from(sq);
        }
        all
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
