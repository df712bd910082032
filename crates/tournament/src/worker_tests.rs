use super::*;
use std::time::Instant;

use strategies::FirstMoveStrategy;

struct Slow;

impl Strategy for Slow {
    fn name(&self) -> &str {
        "Slow"
    }

    fn decide(&mut self, pos: &Position) -> Result<Move, StrategyError> {
        thread::sleep(Duration::from_secs(2));
        pos.legal_moves()
            .first()
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }
}

struct Grumpy;

impl Strategy for Grumpy {
    fn name(&self) -> &str {
        "Grumpy"
    }

    fn decide(&mut self, _pos: &Position) -> Result<Move, StrategyError> {
        panic!("not today")
    }
}

#[test]
fn test_worker_relays_moves() {
    let mut worker = StrategyWorker::spawn(Box::new(FirstMoveStrategy::new())).unwrap();
    let pos = Position::startpos();

    let mv = worker.decide(&pos, Duration::from_secs(5)).unwrap();
    assert_eq!(mv.to_string(), "a2a3");
    assert_eq!(worker.name(), "First Move Bot");

    // The same thread keeps serving requests.
    let again = worker.decide(&pos, Duration::from_secs(5)).unwrap();
    assert_eq!(again, mv);
}

#[test]
fn test_worker_times_out_and_stays_timed_out() {
    let mut worker = StrategyWorker::spawn(Box::new(Slow)).unwrap();
    let pos = Position::startpos();
    let timeout = Duration::from_millis(30);

    let started = Instant::now();
    assert_eq!(
        worker.decide(&pos, timeout),
        Err(MatchFault::StrategyTimeout(timeout))
    );
    assert!(started.elapsed() < Duration::from_secs(1));

    let started = Instant::now();
    assert_eq!(
        worker.decide(&pos, timeout),
        Err(MatchFault::StrategyTimeout(timeout))
    );
    assert!(started.elapsed() < Duration::from_millis(20));
}

#[test]
fn test_dropping_a_timed_out_worker_does_not_block() {
    let started = Instant::now();
    {
        let mut worker = StrategyWorker::spawn(Box::new(Slow)).unwrap();
        let _ = worker.decide(&Position::startpos(), Duration::from_millis(10));
    }
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_panics_become_faults() {
    let mut worker = StrategyWorker::spawn(Box::new(Grumpy)).unwrap();
    let pos = Position::startpos();

    match worker.decide(&pos, Duration::from_secs(5)) {
        Err(MatchFault::StrategyFault(msg)) => {
            assert!(msg.starts_with("panicked"));
            assert!(msg.contains("not today"));
        }
        other => panic!("expected a fault, got {other:?}"),
    }

    // The thread survives the panic.
    assert!(matches!(
        worker.decide(&pos, Duration::from_secs(5)),
        Err(MatchFault::StrategyFault(_))
    ));
}

#[test]
fn test_no_legal_moves_is_a_fault() {
    let mut worker = StrategyWorker::spawn(Box::new(FirstMoveStrategy::new())).unwrap();
    let mated = Position::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(matches!(
        worker.decide(&mated, Duration::from_secs(5)),
        Err(MatchFault::StrategyFault(_))
    ));
}
