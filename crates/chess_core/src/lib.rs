//! Chess rules for the strategy tournament: board representation, legal
//! move generation, game-over detection, SAN/PGN output and the `Strategy`
//! contract every player implements.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod movegen;
pub mod perft;
pub mod pgn;
pub mod san;
pub mod status;
pub mod strategy;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use pgn::export_game;
pub use san::{line_to_san, move_to_san};
pub use status::{Outcome, Termination};
pub use strategy::{Strategy, StrategyError};
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;
