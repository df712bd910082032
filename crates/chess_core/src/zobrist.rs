//! Zobrist hashing, used by the position's move stack to detect repetitions.
//!
//! The hash XORs together one random key per (piece, square), one for Black
//! to move, one per castling right and one per en-passant file.

use crate::board::Position;
use crate::types::{Color, Piece};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Keys come from a splitmix64 stream with a fixed seed, so hashes are
    /// stable across runs and platforms.
    pub const fn new() -> Self {
        const fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x5EED_C0FF_EE00_0001u64;
        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    pieces[color][kind][sq] = splitmix64(&mut state);
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        let black_to_move = splitmix64(&mut state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            castling[i] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            en_passant[i] = splitmix64(&mut state);
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Full hash of a position.
///
/// The en-passant file only contributes when a pawn of the side to move
/// stands ready to take, so two positions that differ only in an unusable
/// en-passant square count as repetitions of each other.
pub fn hash_position(pos: &Position) -> u64 {
    let mut h = 0u64;
    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            h ^= ZOBRIST.piece_key(pc, sq);
        }
    }
    if pos.side_to_move == Color::Black {
        h ^= ZOBRIST.black_to_move;
    }
    let rights = [
        pos.castling.wk,
        pos.castling.wq,
        pos.castling.bk,
        pos.castling.bq,
    ];
    for (i, &has) in rights.iter().enumerate() {
        if has {
            h ^= ZOBRIST.castling[i];
        }
    }
    if let Some(ep) = pos.en_passant {
        if pos.has_en_passant_capture(ep) {
            h ^= ZOBRIST.en_passant[(ep % 8) as usize];
        }
    }
    h
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
