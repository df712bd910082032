//! Tests for game-over detection
//!
//! Covers every automatic ending:
//! - Checkmate
//! - Stalemate
//! - Insufficient material
//! - Seventy-five-move rule
//! - Fivefold repetition

use chess_core::{parse_uci_move, Color, Outcome, Position, Termination};

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("valid FEN")
}

fn shuffle_knights(pos: &mut Position, cycles: usize) {
    for _ in 0..cycles {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = parse_uci_move(pos, uci).expect("legal shuffle move");
            pos.push(mv);
        }
    }
}

// =============================================================================
// Checkmate / Stalemate
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let pos = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert_eq!(
        pos.outcome(),
        Some(Outcome {
            termination: Termination::Checkmate,
            winner: Some(Color::White)
        })
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(pos.is_check());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.outcome(), None);
}

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(pos.is_stalemate());
    assert!(!pos.is_check());
    assert_eq!(
        pos.outcome().map(|o| (o.termination, o.winner)),
        Some((Termination::Stalemate, None))
    );
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let pos = fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(pos.is_stalemate());
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_lone_minors() {
    for f in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
    ] {
        assert!(fen(f).is_insufficient_material(), "{f}");
    }
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // Bishops on c1 and f8 are both on dark squares
    let pos = fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(pos.is_insufficient_material());
    assert_eq!(
        pos.outcome().map(|o| o.termination),
        Some(Termination::InsufficientMaterial)
    );
}

#[test]
fn test_sufficient_material() {
    for f in [
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", // opposite-coloured bishops
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/2B5 w - - 0 1", // knight against bishop
    ] {
        assert!(!fen(f).is_insufficient_material(), "{f}");
    }
}

// =============================================================================
// Seventy-five moves / fivefold repetition
// =============================================================================

#[test]
fn test_seventy_five_move_rule() {
    let at_limit = fen("8/8/8/4k3/8/4K3/8/4R3 w - - 150 90");
    let below = fen("8/8/8/4k3/8/4K3/8/4R3 w - - 149 90");
    assert_eq!(
        at_limit.outcome().map(|o| o.termination),
        Some(Termination::SeventyFiveMoves)
    );
    assert_eq!(below.outcome(), None);
}

#[test]
fn test_fifty_moves_alone_is_not_a_draw() {
    let pos = fen("8/8/8/4k3/8/4K3/8/4R3 w - - 100 60");
    assert!(!pos.is_seventyfive_moves());
    assert!(!pos.is_game_over());
}

#[test]
fn test_mate_takes_precedence_over_seventy_five_moves() {
    let pos = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 150 4");
    assert_eq!(
        pos.outcome().map(|o| o.termination),
        Some(Termination::Checkmate)
    );
}

#[test]
fn test_fivefold_repetition() {
    let mut pos = Position::startpos();
    shuffle_knights(&mut pos, 3);
    // Threefold is not an automatic draw.
    assert_eq!(pos.repetition_count(), 4);
    assert!(!pos.is_game_over());

    shuffle_knights(&mut pos, 1);
    assert_eq!(pos.repetition_count(), 5);
    assert_eq!(
        pos.outcome().map(|o| (o.termination, o.winner)),
        Some((Termination::FivefoldRepetition, None))
    );
}

#[test]
fn test_termination_display() {
    assert_eq!(Termination::Checkmate.to_string(), "checkmate");
    assert_eq!(
        Termination::InsufficientMaterial.to_string(),
        "insufficient material"
    );
    assert_eq!(
        Termination::FivefoldRepetition.to_string(),
        "fivefold repetition"
    );
}
