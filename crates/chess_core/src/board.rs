use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::types::*;
use crate::zobrist::hash_position;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks in FEN board, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}' in FEN")]
    BadPiece(char),
    #[error("rank {0} of FEN board does not describe 8 files")]
    RankLength(usize),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    Castling(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: u32 },
}

/// Everything `make_move` needs to take a move back.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub captured_id: Option<PieceId>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

#[derive(Clone, Debug)]
struct PlayedMove {
    mv: Move,
    undo: Undo,
    hash_before: u64,
}

/// A chess position together with the moves that led to it.
///
/// `push`/`pop` are the game-level API: they keep the Zobrist hash and the
/// move stack current, which repetition detection relies on. `make_move` and
/// `unmake_move` are the raw board edits used by move generation and perft;
/// they leave the hash and stack alone.
#[derive(Clone, Debug)]
pub struct Position {
    board: [Option<Piece>; 64],
    ids: [Option<PieceId>; 64],
    colors: [Bitboard; 2],
    kinds: [Bitboard; 6],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    hash: u64,
    stack: Vec<PlayedMove>,
}

impl PartialEq for Position {
    /// Positions compare by placement, rights and counters; history is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    fn empty() -> Self {
        Position {
            board: [None; 64],
            ids: [None; 64],
            colors: [Bitboard::EMPTY; 2],
            kinds: [Bitboard::EMPTY; 6],
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            stack: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.set_piece(f as u8, Some(Piece::new(Color::White, kind)));
            p.set_piece(8 + f as u8, Some(Piece::new(Color::White, PieceKind::Pawn)));
            p.set_piece(48 + f as u8, Some(Piece::new(Color::Black, PieceKind::Pawn)));
            p.set_piece(56 + f as u8, Some(Piece::new(Color::Black, kind)));
        }
        p.castling = CastlingRights::ALL;
        p.finish_setup();
        p
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut p = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = Piece::from_fen_char(ch).ok_or(FenError::BadPiece(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankLength(8 - rank_idx))?;
                    p.set_piece(s, Some(pc));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankLength(8 - rank_idx));
                }
            }
            if file != 8 {
                return Err(FenError::RankLength(8 - rank_idx));
            }
        }

        p.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => p.castling.wk = true,
                    'Q' => p.castling.wq = true,
                    'k' => p.castling.bk = true,
                    'q' => p.castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }

        p.en_passant = match parts[3] {
            "-" => None,
            s => Some(coord_to_sq(s).ok_or_else(|| FenError::EnPassant(s.to_string()))?),
        };

        let counter = |s: &str| s.parse::<u32>().map_err(|_| FenError::Counter(s.to_string()));
        p.halfmove_clock = parts.get(4).map_or(Ok(0), |s| counter(*s))?;
        p.fullmove_number = parts.get(5).map_or(Ok(1), |s| counter(*s))?.max(1);

        for color in Color::ALL {
            let count = p.pieces(color, PieceKind::King).popcount();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        p.finish_setup();
        Ok(p)
    }

    /// Number pieces in square order and compute the initial hash.
    fn finish_setup(&mut self) {
        let mut next = 0u8;
        for s in 0..64 {
            if self.board[s].is_some() {
                self.ids[s] = Some(PieceId(next));
                next += 1;
            }
        }
        self.hash = hash_position(self);
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let before = out.len();
        for (has, c) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if has {
                out.push(c);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    // --- queries ---

    #[inline]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// Identity of the piece on `sq`, if any.
    #[inline]
    pub fn piece_id_at(&self, sq: u8) -> Option<PieceId> {
        self.ids[sq as usize]
    }

    /// Current square of a piece, or `None` once it has been captured.
    pub fn square_of(&self, id: PieceId) -> Option<u8> {
        self.ids.iter().position(|&i| i == Some(id)).map(|s| s as u8)
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.colors[color.idx()] & self.kinds[kind.idx()]
    }

    #[inline]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.colors[color.idx()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    pub fn king_square(&self, c: Color) -> Option<u8> {
        self.pieces(c, PieceKind::King).first()
    }

    /// Sum of `PieceKind::value` over one side's pieces.
    pub fn material(&self, c: Color) -> u32 {
        PieceKind::ALL
            .iter()
            .map(|&k| self.pieces(c, k).popcount() * k.value())
            .sum()
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Number of moves pushed since the position was set up.
    pub fn ply_count(&self) -> usize {
        self.stack.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.stack.last().map(|p| p.mv)
    }

    /// Moves pushed since setup, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|p| p.mv)
    }

    /// True if a pawn of the side to move could take on `ep`.
    pub fn has_en_passant_capture(&self, ep: u8) -> bool {
        let us = self.side_to_move;
        !(crate::attacks::pawn_attacks(ep, us.other()) & self.pieces(us, PieceKind::Pawn))
            .is_empty()
    }

    /// How many times the current position has occurred, counting itself.
    ///
    /// Only the stretch since the last capture or pawn move is searched;
    /// anything earlier cannot match.
    pub fn repetition_count(&self) -> usize {
        let window = (self.halfmove_clock as usize).min(self.stack.len());
        1 + self.stack[self.stack.len() - window..]
            .iter()
            .filter(|p| p.hash_before == self.hash)
            .count()
    }

    // --- game-level edits ---

    /// Play `mv` and record it. `mv` should come from `legal_moves`.
    pub fn push(&mut self, mv: Move) {
        let hash_before = self.hash;
        let undo = self.make_move(mv);
        self.hash = hash_position(self);
        self.stack.push(PlayedMove {
            mv,
            undo,
            hash_before,
        });
    }

    /// Take back the most recent `push`.
    pub fn pop(&mut self) -> Option<Move> {
        let played = self.stack.pop()?;
        self.unmake_move(played.mv, played.undo);
        self.hash = played.hash_before;
        Some(played.mv)
    }

    // --- raw board edits ---

    pub(crate) fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        if let Some(old) = self.board[sq as usize] {
            self.colors[old.color.idx()].remove(sq);
            self.kinds[old.kind.idx()].remove(sq);
        }
        if let Some(new) = pc {
            self.colors[new.color.idx()].insert(sq);
            self.kinds[new.kind.idx()].insert(sq);
        }
        self.board[sq as usize] = pc;
    }

    /// Move a piece and its identity together, overwriting the destination.
    fn relocate(&mut self, from: u8, to: u8, pc: Piece) {
        let id = self.ids[from as usize].take();
        self.set_piece(from, None);
        self.set_piece(to, Some(pc));
        self.ids[to as usize] = id;
    }

    /// Apply `mv` to the board without touching the hash or move stack.
    ///
    /// # Panics
    /// Panics if there is no piece on `mv.from`.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let mut captured_id = self.piece_id_at(to);
        let prev_castling = self.castling;
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            if let Some(cs) = sq(file_of(to), rank_of(to) - moved.color.forward()) {
                captured = self.piece_at(cs);
                captured_id = self.ids[cs as usize].take();
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        let promo_rank = 7 - moved.color.back_rank();
        let placed = if moved.kind == PieceKind::Pawn && rank_of(to) == promo_rank {
            Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.relocate(from, to, placed);

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rank = moved.color.back_rank();
            let (rf, rt) = if file_of(to) == 6 { (7, 5) } else { (0, 3) };
            if let (Some(rf), Some(rt)) = (sq(rf, rank), sq(rt, rank)) {
                if let Some(rook) = self.piece_at(rf) {
                    self.relocate(rf, rt, rook);
                    rook_move = Some((rf, rt));
                }
            }
        }

        // Rights go when the king or a rook leaves home, or a rook is taken there.
        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            }
        }
        for s in [from, to] {
            match s {
                0 => self.castling.wq = false,
                7 => self.castling.wk = false,
                56 => self.castling.bq = false,
                63 => self.castling.bk = false,
                _ => {}
            }
        }

        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            captured_id,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            if let Some(rook) = self.piece_at(rt) {
                self.relocate(rt, rf, rook);
            }
        }

        // Restoring `moved_piece` also turns a promoted piece back into a pawn.
        self.relocate(mv.to, mv.from, undo.moved_piece);

        let restore_sq = undo.ep_captured_sq.unwrap_or(mv.to);
        self.set_piece(restore_sq, undo.captured);
        self.ids[restore_sq as usize] = undo.captured_id;
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
