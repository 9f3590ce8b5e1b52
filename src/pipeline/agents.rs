//! Agent implementations (adapters for the [`Agent`] port)

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::trace;

use crate::{
    Error, Result,
    ports::{Agent, AgentKind},
    search::{Minimax, SearchConfig},
    tictactoe::{BoardState, Move},
};

/// Plays the exhaustive minimax move for whichever side is to move
pub struct MinimaxAgent {
    name: String,
    engine: Minimax,
}

impl MinimaxAgent {
    /// Create a minimax agent with the default search configuration
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    /// Create a minimax agent with a custom search configuration.
    ///
    /// A fixed maximizer in `config` is dropped: the agent always maximizes
    /// for the side it is asked to move for.
    pub fn with_config(name: String, config: SearchConfig) -> Self {
        let config = SearchConfig {
            maximizer: None,
            ..config
        };
        Self {
            name,
            engine: Minimax::new(config),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<Move> {
        self.engine.decide(state)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Minimax
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks uniformly among the empty cells
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from system entropy
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        trace!(agent = %self.name, %mv, "random move");
        Ok(mv)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Build a boxed agent of the given kind
pub fn create_agent(kind: AgentKind, name: String, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::new(name)),
        AgentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
            None => Box::new(RandomAgent::new(name)),
        },
    }
}
