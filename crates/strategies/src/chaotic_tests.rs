use super::*;

use chrono::NaiveDate;

use crate::clock::FixedClock;

fn at_second(second: u32) -> ChaoticStrategy {
    let t = NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(12, 0, second)
        .unwrap();
    ChaoticStrategy::new(Box::new(FixedClock(t)))
}

#[test]
fn test_second_indexes_the_move_list() {
    let pos = Position::startpos();
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 20);

    assert_eq!(at_second(0).decide(&pos), Ok(moves[0]));
    assert_eq!(at_second(7).decide(&pos), Ok(moves[7]));
    // Wraps around the 20 opening moves.
    assert_eq!(at_second(47).decide(&pos), Ok(moves[7]));
}

#[test]
fn test_single_reply_is_always_played() {
    let pos = Position::from_fen("k7/8/1K6/8/8/8/8/8 b - - 0 1").unwrap();
    let only = pos.legal_moves();
    assert_eq!(only.len(), 1);
    for second in [0, 13, 59] {
        assert_eq!(at_second(second).decide(&pos), Ok(only[0]));
    }
}

#[test]
fn test_no_moves_is_an_error() {
    let mated = Position::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(at_second(5).decide(&mated), Err(StrategyError::NoLegalMoves));
}
