use super::*;

#[test]
fn test_knight_attacks() {
    // Knight on e4 (square 28) should attack 8 squares
    assert_eq!(knight_attacks(28).popcount(), 8);

    // Knight in the corner only reaches c2 and b3
    let attacks = knight_attacks(0);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(10)); // c2
    assert!(attacks.contains(17)); // b3
}

#[test]
fn test_king_attacks() {
    assert_eq!(king_attacks(28).popcount(), 8);
    assert_eq!(king_attacks(0).popcount(), 3);
}

#[test]
fn test_pawn_attacks_by_color() {
    // White pawn on e4 attacks d5 and f5
    let attacks = pawn_attacks(28, Color::White);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(35)); // d5
    assert!(attacks.contains(37)); // f5

    // Black pawn on e4 attacks d3 and f3
    let attacks = pawn_attacks(28, Color::Black);
    assert!(attacks.contains(19)); // d3
    assert!(attacks.contains(21)); // f3

    // Edge pawn only has one capture square
    assert_eq!(pawn_attacks(8, Color::White).popcount(), 1);
}

#[test]
fn test_slider_attacks_empty_board() {
    assert_eq!(rook_attacks(28, Bitboard::EMPTY).popcount(), 14);
    assert_eq!(bishop_attacks(28, Bitboard::EMPTY).popcount(), 13);
    assert_eq!(queen_attacks(28, Bitboard::EMPTY).popcount(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    // Rook on a1, blocker on a4
    let occupied = Bitboard::from_square(24);
    let attacks = rook_attacks(0, occupied);
    assert!(attacks.contains(16)); // a3
    assert!(attacks.contains(24)); // a4 (can capture)
    assert!(!attacks.contains(32)); // a5 (blocked)
    assert!(attacks.contains(7)); // h1
}

#[test]
fn test_attackers_of_square() {
    // White: Ke1, Nf3, Bb2. Black: Ke8, Pd6. Target e5.
    let pos = Position::from_fen("4k3/8/3p4/8/8/5N2/1B6/4K3 w - - 0 1").unwrap();
    let white = pos.attackers(Color::White, 36);
    assert!(white.contains(21)); // Nf3
    assert!(white.contains(9)); // Bb2 along the long diagonal
    assert_eq!(white.popcount(), 2);

    let black = pos.attackers(Color::Black, 36);
    assert_eq!(black.squares().collect::<Vec<_>>(), vec![43]); // d6 pawn
    assert!(pos.is_square_attacked(36, Color::Black));
    assert!(!pos.is_square_attacked(0, Color::Black));
}

#[test]
fn test_attacked_squares_startpos() {
    let pos = Position::startpos();
    let hit = pos.attacked_squares(Color::White);
    // Every square of the third rank is covered by a pawn.
    for s in 16..24 {
        assert!(hit.contains(s));
    }
    assert!(!hit.contains(28)); // e4
}
