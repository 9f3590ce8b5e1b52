//! Agent port - anything that can pick the next move
//!
//! Match runs and the command line work against this trait, so the minimax
//! engine and the baselines are interchangeable:
//! - exhaustive minimax
//! - uniform random play

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{BoardState, Move},
};

/// The kinds of agent the crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Random,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::Minimax, AgentKind::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Minimax => "minimax",
            AgentKind::Random => "random",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "optimal" => Ok(AgentKind::Minimax),
            "random" => Ok(AgentKind::Random),
            other => Err(Error::UnknownAgent {
                name: other.to_string(),
                expected: AgentKind::ALL.map(|k| k.as_str()).join(", "),
            }),
        }
    }
}

/// A move chooser for either side.
pub trait Agent: Send {
    /// Choose a move for the side to move on `state`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoLegalMove` if the game on `state` is already over.
    fn select_move(&mut self, state: &BoardState) -> Result<Move>;

    /// Which kind of agent this is
    fn kind(&self) -> AgentKind;

    /// Display name used in reports and logs
    fn name(&self) -> &str;

    /// Reseed any internal randomness. Deterministic agents ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
