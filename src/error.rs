//! Error types for the minimax crate

use thiserror::Error;

/// Main error type for the minimax crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("coordinate ({row}, {col}) is out of bounds (rows and columns are 0-2)")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown agent '{name}'. Supported: {expected}")]
    UnknownAgent { name: String, expected: String },

    #[error("verification failed at '{state}': {message}")]
    VerificationFailed { state: String, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
