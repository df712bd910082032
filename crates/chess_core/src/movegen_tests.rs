use super::*;
use crate::uci::move_to_uci;

fn uci_set(moves: &[Move]) -> Vec<String> {
    let mut v: Vec<String> = moves.iter().map(|m| move_to_uci(*m)).collect();
    v.sort();
    v
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves
    assert_eq!(legal_moves(&pos).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_promotions_emit_all_four_pieces() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.from == 48)
        .map(|m| m.promo)
        .collect();
    assert_eq!(
        promos,
        vec![
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight)
        ]
    );
}

#[test]
fn test_en_passant_is_generated() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let ep: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_en_passant)
        .collect();
    assert_eq!(uci_set(&ep), vec!["e5f6"]);
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Bishop on e2 is pinned by the rook on e8.
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| m.from != 12));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Black rook on f8 covers f1.
    let pos = Position::from_fen("5rk1/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));
}

#[test]
fn test_legal_moves_for_other_side() {
    let pos = Position::startpos();
    let black = pos.legal_moves_for(Color::Black);
    assert_eq!(black.len(), 20);
    assert!(black.iter().all(|m| rank_of(m.from) >= 6));
}

#[test]
fn test_capture_and_check_queries() {
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/R3K3 w - - 0 1").unwrap();
    let exd5 = Move::new(28, 35);
    let ra8 = Move::new(0, 56);
    let ra2 = Move::new(0, 8);
    assert!(pos.is_capture(exd5));
    assert!(!pos.is_capture(ra8));
    assert!(pos.gives_check(ra8));
    assert!(!pos.gives_check(ra2));
}
