use clap::Parser;
use minimax_ttt::{
    cli::commands::{
        decide::{self, DecideArgs},
        play::{self, PlayArgs},
    },
    pipeline::{AgentKind, MatchResult},
    search::Selection,
    tictactoe::Player,
};
use tempfile::tempdir;

#[test]
fn play_exports_match_result() {
    let tmp = tempdir().unwrap();
    let export = tmp.path().join("match.json");

    let args = PlayArgs::parse_from([
        "play",
        "--x",
        "minimax",
        "--o",
        "random",
        "--games",
        "5",
        "--seed",
        "42",
        "--quiet",
        "--export",
        export.to_str().unwrap(),
    ]);
    play::execute(args).expect("match should succeed");

    let result = MatchResult::load(&export).unwrap();
    assert_eq!(result.total_games, 5);
    assert_eq!(result.o_wins, 0, "minimax as X must never lose");

    let contents = std::fs::read_to_string(&export).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_games"], 5);
    assert_eq!(parsed["x_agent"], "minimax (X)");
}

#[test]
fn play_parses_agent_kinds_and_first_player() {
    let args = PlayArgs::parse_from(["play", "-x", "random", "-o", "optimal", "--first", "o"]);
    assert_eq!(args.x, AgentKind::Random);
    assert_eq!(args.o, AgentKind::Minimax);
    assert_eq!(args.first, Player::O);
    assert_eq!(args.games, 100);
}

#[test]
fn play_rejects_unknown_agent() {
    let parsed = PlayArgs::try_parse_from(["play", "--x", "alphabeta"]);
    assert!(parsed.is_err());
}

#[test]
fn decide_accepts_options() {
    let args = DecideArgs::parse_from([
        "decide",
        "X.O.X....",
        "--maximizer",
        "x",
        "--selection",
        "reuse",
        "--all",
        "--json",
    ]);
    assert_eq!(args.maximizer, Some(Player::X));
    assert_eq!(args.selection, Selection::Reuse);
    decide::execute(args).expect("decide should succeed");
}

#[test]
fn decide_reports_finished_games_as_errors() {
    let args = DecideArgs::parse_from(["decide", "XOXXOOOXX"]);
    let err = decide::execute(args).unwrap_err();
    assert!(err.to_string().contains("no legal move"), "{err}");
}

#[test]
fn decide_rejects_malformed_boards() {
    let args = DecideArgs::parse_from(["decide", "XO?......"]);
    assert!(decide::execute(args).is_err());
}

#[test]
fn decide_rejects_boards_with_extra_cells() {
    let args = DecideArgs::parse_from(["decide", "X.O.X....OO?"]);
    let err = decide::execute(args).unwrap_err();
    assert!(err.to_string().contains("expected 9 cells, got 12"), "{err}");
}
