//! Verify command - cross-check minimax against the negamax reference

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_progress, format_number, print_kv, print_section},
    search::verify_all,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Check every reachable position against a reference solver")]
pub struct VerifyArgs {
    /// Which player opens (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: Player,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    println!("Enumerating positions reachable with {} opening...", args.first);

    let progress = create_progress(0, "positions")?;
    let report = verify_all(args.first, |done, total| {
        if progress.length() != Some(total as u64) {
            progress.set_length(total as u64);
        }
        progress.set_position(done as u64);
    })?;
    progress.finish_and_clear();

    print_section("Verification Passed");
    print_kv("Positions", &format_number(report.positions as u64));
    print_kv("Decisions", &format_number(report.decisions as u64));
    print_kv("Winning for mover", &format_number(report.wins as u64));
    print_kv("Drawn", &format_number(report.draws as u64));
    print_kv("Losing for mover", &format_number(report.losses as u64));

    Ok(())
}
