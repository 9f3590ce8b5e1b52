//! Optimal Tic-Tac-Toe moves by exhaustive minimax search
//!
//! This crate provides:
//! - A Tic-Tac-Toe board with parsing, validation and a game record
//! - Successor generation, terminal evaluation and the minimax decision
//! - A negamax reference solver that cross-checks every reachable position
//! - Minimax and random agents with a match runner
//!
//! The entry point is [`decide`]:
//!
//! ```
//! use minimax_ttt::{decide, tictactoe::{BoardState, Move}};
//!
//! // O threatens the middle row; X to move must block
//! let board = BoardState::from_string("X..OO.X..").unwrap();
//! assert_eq!(decide(&board).unwrap(), Move::new(1, 2).unwrap());
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Decision, Minimax, SearchConfig, Selection, decide};
pub use tictactoe::{BoardState, Move, Player};
