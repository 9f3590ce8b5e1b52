//! Play command - run a match between two agents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_progress, format_percent, print_kv, print_section},
    pipeline::{AgentKind, MatchConfig, MatchRunner, create_agent},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two agents")]
pub struct PlayArgs {
    /// Agent playing X (minimax, random)
    #[arg(long, short = 'x', default_value = "minimax")]
    pub x: AgentKind,

    /// Agent playing O (minimax, random)
    #[arg(long, short = 'o', default_value = "random")]
    pub o: AgentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which player opens every game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Player,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export the match result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
        first_player: args.first,
    };

    let mut x_agent = create_agent(args.x, format!("{} (X)", args.x), args.seed);
    let mut o_agent = create_agent(
        args.o,
        format!("{} (O)", args.o),
        args.seed.map(|s| s.wrapping_add(1)),
    );

    let runner = MatchRunner::new(config);

    print_section("Match Configuration");
    print_kv("X", x_agent.name());
    print_kv("O", o_agent.name());
    print_kv("First player", &runner.config().first_player.to_string());
    print_kv("Games", &runner.config().games.to_string());
    if let Some(seed) = runner.config().seed {
        print_kv("Seed", &seed.to_string());
    }

    let progress = if args.quiet {
        None
    } else {
        Some(create_progress(args.games as u64, "games")?)
    };

    let result = runner.run(x_agent.as_mut(), o_agent.as_mut(), |_, _| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Match Result");
    print_kv(
        "X wins",
        &format!("{} ({})", result.x_wins, format_percent(result.x_win_rate())),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", result.o_wins, format_percent(result.o_win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, format_percent(result.draw_rate())),
    );

    if let Some(path) = args.export {
        result.save(&path)?;
        println!("\nResult exported to: {}", path.display());
    }

    Ok(())
}
