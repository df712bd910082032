use super::*;

use rand::SeedableRng;

fn opponent_can_capture(pos: &Position, mv: Move) -> bool {
    after(pos, mv, |next| {
        next.legal_moves().into_iter().any(|reply| next.is_capture(reply))
    })
}

#[test]
fn test_moves_the_attacked_rook_to_safety() {
    // The e5 pawn attacks the rook on d4; king moves would leave it hanging.
    let pos = Position::from_fen("4k3/8/8/4p3/3R4/8/8/K7 w - - 0 1").unwrap();
    assert!(pos.legal_moves().iter().any(|&m| opponent_can_capture(&pos, m)));

    for seed in 0..30 {
        let mv = DefensiveStrategy::new(ChaCha8Rng::seed_from_u64(seed))
            .decide(&pos)
            .unwrap();
        assert_eq!(mv.from, 27, "expected a rook move, got {mv}");
        assert!(!opponent_can_capture(&pos, mv), "{mv} leaves a capture");
    }
}

#[test]
fn test_is_safe_matches_the_reply_set() {
    let pos = Position::from_fen("4k3/8/8/4p3/3R4/8/8/K7 w - - 0 1").unwrap();
    for mv in pos.legal_moves() {
        assert_eq!(DefensiveStrategy::is_safe(&pos, mv), !opponent_can_capture(&pos, mv));
    }
}
