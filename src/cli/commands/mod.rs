//! Subcommands of the `minimax-ttt` binary

pub mod decide;
pub mod play;
pub mod verify;
