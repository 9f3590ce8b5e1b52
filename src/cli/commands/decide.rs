//! Decide command - optimal move for a single board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_number, print_kv, print_section, print_subsection},
    search::{Decision, Minimax, SearchConfig, Selection, Utility},
    tictactoe::{BoardState, LineAnalyzer, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a board")]
pub struct DecideArgs {
    /// Board in row-major order, e.g. "X.O.X...." or "X.O.X...._O"
    pub state: String,

    /// Mark that maximizes (defaults to the side to move)
    #[arg(long)]
    pub maximizer: Option<Player>,

    /// Move selection strategy
    #[arg(long, value_enum, default_value_t = Selection::Rescan)]
    pub selection: Selection,

    /// List the value of every move
    #[arg(long)]
    pub all: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DecideReport {
    state: String,
    to_move: Player,
    maximizer: Player,
    selection: Selection,
    decision: Decision,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    move_values: Vec<MoveValue>,
}

#[derive(Serialize)]
struct MoveValue {
    #[serde(rename = "move")]
    mv: Move,
    value: Utility,
}

pub fn execute(args: DecideArgs) -> Result<()> {
    let state = BoardState::from_string(&args.state)?;
    if !state.is_valid() {
        tracing::warn!(state = %state.encode(), "board is not reachable in a normal game");
    }

    let mut config = SearchConfig::new().with_selection(args.selection);
    if let Some(maximizer) = args.maximizer {
        config = config.with_maximizer(maximizer);
    }
    let engine = Minimax::new(config);
    let perspective = engine.config().perspective_for(&state);

    let decision = engine.evaluate(&state)?;
    let move_values: Vec<MoveValue> = if args.all {
        engine
            .move_values(&state)
            .into_iter()
            .map(|(mv, value)| MoveValue { mv, value })
            .collect()
    } else {
        Vec::new()
    };

    if args.json {
        let report = DecideReport {
            state: state.encode(),
            to_move: state.to_move,
            maximizer: perspective.maximizer(),
            selection: engine.config().selection,
            decision,
            move_values,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Minimax Decision");
    println!("{state}");
    println!();
    print_kv("To move", &state.to_move.to_string());
    print_kv("Maximizer", &perspective.maximizer().to_string());
    print_kv("Selection", engine.config().selection.as_str());
    print_kv("Optimal move", &decision.mv.to_string());
    print_kv("Value", describe_value(decision.value));
    print_kv("Nodes searched", &format_number(decision.nodes));

    let wins = LineAnalyzer::winning_moves(&state.cells, state.to_move);
    let threats = LineAnalyzer::winning_moves(&state.cells, state.to_move.opponent());
    if !wins.is_empty() {
        print_kv("Immediate wins", &format_positions(&wins));
    }
    if !threats.is_empty() {
        print_kv("Threats to block", &format_positions(&threats));
    }

    if !move_values.is_empty() {
        print_subsection("Move values (for the maximizer)");
        for entry in &move_values {
            let marker = if entry.mv == decision.mv { " <- chosen" } else { "" };
            println!("  {} {:>2} {}{marker}", entry.mv, entry.value, describe_value(entry.value));
        }
    }

    Ok(())
}

fn describe_value(value: Utility) -> &'static str {
    match value {
        1 => "win",
        -1 => "loss",
        _ => "draw",
    }
}

fn format_positions<'a>(positions: impl IntoIterator<Item = &'a usize>) -> String {
    positions
        .into_iter()
        .filter_map(|&pos| Move::from_position(pos).ok())
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
