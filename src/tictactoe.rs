//! Tic-Tac-Toe board, rules and game record

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BoardState, Cell, Move, Player};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
