use super::*;

use chess_core::parse_uci_move;
use rand::SeedableRng;

fn strategy(seed: u64) -> AggressiveStrategy {
    AggressiveStrategy::new(ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn test_always_takes_when_it_can() {
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let take = parse_uci_move(&pos, "e4d5").unwrap();
    for seed in 0..20 {
        assert_eq!(strategy(seed).decide(&pos).unwrap(), take);
    }
}

#[test]
fn test_chooses_among_captures_only() {
    // Both the rook and the knight can be taken.
    let pos = Position::from_fen("4k3/8/8/2r1n3/3P4/8/8/4K3 w - - 0 1").unwrap();
    for seed in 0..20 {
        let mv = strategy(seed).decide(&pos).unwrap();
        assert!(pos.is_capture(mv), "{mv} is not a capture");
    }
}

#[test]
fn test_quiet_position_still_moves() {
    let pos = Position::startpos();
    let mv = strategy(3).decide(&pos).unwrap();
    assert!(pos.legal_moves().contains(&mv));
}
