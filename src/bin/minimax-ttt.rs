//! minimax-ttt CLI - optimal Tic-Tac-Toe play by exhaustive minimax
//!
//! This CLI provides:
//! - The optimal move for any board
//! - Matches between minimax and baseline agents
//! - An exhaustive check of the engine against a reference solver

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minimax-ttt")]
#[command(version, about = "Exhaustive minimax for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a board
    Decide(minimax_ttt::cli::commands::decide::DecideArgs),

    /// Play a match between two agents
    Play(minimax_ttt::cli::commands::play::PlayArgs),

    /// Verify the engine on every reachable position
    Verify(minimax_ttt::cli::commands::verify::VerifyArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decide(args) => minimax_ttt::cli::commands::decide::execute(args),
        Commands::Play(args) => minimax_ttt::cli::commands::play::execute(args),
        Commands::Verify(args) => minimax_ttt::cli::commands::verify::execute(args),
    }
}
