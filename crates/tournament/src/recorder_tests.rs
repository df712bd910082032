use super::*;
use crate::match_runner::{MatchState, TerminationReason, Winner};
use chess_core::parse_uci_move;

fn fools_mate() -> PlayedMatch {
    let start = Position::startpos();
    let mut pos = start.clone();
    let mut moves = Vec::new();
    for txt in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = parse_uci_move(&pos, txt).unwrap();
        pos.push(mv);
        moves.push(mv);
    }
    PlayedMatch {
        white: "Random Bot".into(),
        black: "Math Bot".into(),
        result: MatchResult {
            winner: Winner::Black,
            reason: TerminationReason::Checkmate,
        },
        state: MatchState::Completed(TerminationReason::Checkmate),
        start,
        moves,
    }
}

fn record() -> MatchRecord {
    MatchRecord::new(
        &fools_mate(),
        "Test Event",
        "Here",
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        3,
        0.5,
    )
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("recorder-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_sanitize_file_name() {
    assert_eq!(sanitize_file_name("R1_Math Bot_vs_OCD/Bot.pgn"), "R1_Math_Bot_vs_OCD_Bot.pgn");
    assert_eq!(sanitize_file_name("ok-name_1.pgn"), "ok-name_1.pgn");
    assert_eq!(sanitize_file_name("é"), "_");
}

#[test]
fn test_headers_in_order() {
    let headers = record().headers();
    let keys: Vec<_> = headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "Event",
            "Site",
            "Date",
            "Round",
            "White",
            "Black",
            "Result",
            "WhiteType",
            "BlackType",
            "Termination",
            "TimeControl"
        ]
    );
    let get = |k: &str| headers.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("Date"), Some("2024.05.17"));
    assert_eq!(get("Round"), Some("3"));
    assert_eq!(get("Result"), Some("0-1"));
    assert_eq!(get("Termination"), Some("checkmate"));
    assert_eq!(get("TimeControl"), Some("0.5s"));
}

#[test]
fn test_pgn_contains_moves_and_result() {
    let pgn = record().to_pgn();
    assert!(pgn.contains("[Event \"Test Event\"]"));
    assert!(pgn.contains("1. f3 e5 2. g4 Qh4#"));
    assert!(pgn.trim_end().ends_with("0-1"));
}

#[test]
fn test_file_name_is_deterministic_and_safe() {
    let name = record().file_name();
    assert_eq!(name, "R3_Random_Bot_vs_Math_Bot_black_wins_checkmate.pgn");
    assert_eq!(name, record().file_name());
}

#[test]
fn test_save_writes_the_game() {
    let dir = scratch_dir("save");
    let recorder = ResultRecorder::new(&dir);
    let rec = record();

    let path = recorder.save(&rec).unwrap();
    assert_eq!(path, dir.join(rec.file_name()));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, rec.to_pgn());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_into_a_file_path_fails_cleanly() {
    let dir = scratch_dir("blocked");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let recorder = ResultRecorder::new(&blocker);
    assert!(matches!(
        recorder.save(&record()),
        Err(TournamentError::Io { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}
