//! Exhaustive minimax over the full game tree
//!
//! `max_value` and `min_value` are mutually recursive and walk every line of
//! play to a terminal board: no pruning, no caching, no depth cutoff. A search
//! keeps nothing between calls except a node counter owned by the call itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    config::{SearchConfig, Selection},
    successors::successors,
    terminal::{Perspective, Role, Utility, is_terminal, utility},
};
use crate::{
    Error, Result,
    tictactoe::{BoardState, Move},
};

/// Accumulator seed for maximization, below every utility
const MAX_SEED: Utility = -2;
/// Accumulator seed for minimization, above every utility
const MIN_SEED: Utility = 2;

/// Best value the maximizer can force from `board` under optimal play
pub fn max_value(board: &BoardState, perspective: Perspective) -> Utility {
    Search::new(perspective).max_value(board)
}

/// Best value the minimizer can force from `board` under optimal play
pub fn min_value(board: &BoardState, perspective: Perspective) -> Utility {
    Search::new(perspective).min_value(board)
}

/// Optimal move for the side to move, which plays the maximizer.
///
/// Ties between equally good moves go to the first one in row-major order.
///
/// # Errors
///
/// Returns `Error::NoLegalMove` when the board is already won or full.
///
/// # Examples
///
/// ```
/// use minimax_ttt::{decide, tictactoe::{BoardState, Move}};
///
/// // X to move completes the top row
/// let board = BoardState::from_string("XX.OO....").unwrap();
/// assert_eq!(decide(&board).unwrap(), Move::new(0, 2).unwrap());
/// ```
pub fn decide(board: &BoardState) -> Result<Move> {
    Minimax::default().decide(board)
}

/// Outcome of a root decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen move
    #[serde(rename = "move")]
    pub mv: Move,
    /// Minimax value of the root for the maximizer
    pub value: Utility,
    /// Boards visited, root included
    pub nodes: u64,
}

/// One tree walk under a fixed perspective
struct Search {
    perspective: Perspective,
    nodes: u64,
}

impl Search {
    fn new(perspective: Perspective) -> Self {
        Self {
            perspective,
            nodes: 0,
        }
    }

    fn max_value(&mut self, board: &BoardState) -> Utility {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board, self.perspective);
        }

        let mut value = MAX_SEED;
        for child in successors(board) {
            value = value.max(self.min_value(&child));
        }
        value
    }

    fn min_value(&mut self, board: &BoardState) -> Utility {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board, self.perspective);
        }

        let mut value = MIN_SEED;
        for child in successors(board) {
            value = value.min(self.max_value(&child));
        }
        value
    }

    /// Value of `board` when the side holding `role` is to move
    fn value_for(&mut self, board: &BoardState, role: Role) -> Utility {
        match role {
            Role::Maximizer => self.max_value(board),
            Role::Minimizer => self.min_value(board),
        }
    }
}

/// Configurable decision engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal move for the side to move
    pub fn decide(&self, board: &BoardState) -> Result<Move> {
        self.evaluate(board).map(|decision| decision.mv)
    }

    /// Optimal move together with the root value and search size.
    ///
    /// The side to move is the maximizer unless the configuration fixes one;
    /// when it is the minimizer the roles of `max_value` and `min_value` swap.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoLegalMove` when the board is already won or full.
    #[instrument(skip_all, fields(state = %board.encode(), selection = %self.config.selection))]
    pub fn evaluate(&self, board: &BoardState) -> Result<Decision> {
        if is_terminal(board) {
            debug!("refusing to decide on a finished game");
            return Err(Error::NoLegalMove);
        }

        let perspective = self.config.perspective_for(board);
        let mover = perspective.role_of(board.to_move);
        let mut search = Search::new(perspective);

        let (mv, value) = match self.config.selection {
            Selection::Rescan => Self::select_by_rescan(&mut search, board, mover)?,
            Selection::Reuse => Self::select_by_reuse(&mut search, board, mover)?,
        };

        debug!(%mv, value, nodes = search.nodes, ?mover, "decision made");
        Ok(Decision {
            mv,
            value,
            nodes: search.nodes,
        })
    }

    /// Opponent-response value of every successor, in row-major order.
    ///
    /// Values are for the configured maximizer. Empty on a finished game.
    pub fn move_values(&self, board: &BoardState) -> Vec<(Move, Utility)> {
        if is_terminal(board) {
            return Vec::new();
        }
        let perspective = self.config.perspective_for(board);
        let responder = perspective.role_of(board.to_move).opposite();
        let mut search = Search::new(perspective);
        Self::response_values(&mut search, board, responder)
    }

    /// Root value first, then a fresh search per successor until one matches.
    fn select_by_rescan(
        search: &mut Search,
        board: &BoardState,
        mover: Role,
    ) -> Result<(Move, Utility)> {
        let root_value = search.value_for(board, mover);

        for child in successors(board) {
            if search.value_for(&child, mover.opposite()) == root_value {
                return child
                    .last_move
                    .map(|mv| (mv, root_value))
                    .ok_or(Error::NoLegalMove);
            }
        }

        Err(Error::NoLegalMove)
    }

    /// One search per successor, then the first best value in scan order.
    fn select_by_reuse(
        search: &mut Search,
        board: &BoardState,
        mover: Role,
    ) -> Result<(Move, Utility)> {
        let values = Self::response_values(search, board, mover.opposite());

        let root_value = match mover {
            Role::Maximizer => values.iter().fold(MAX_SEED, |acc, &(_, v)| acc.max(v)),
            Role::Minimizer => values.iter().fold(MIN_SEED, |acc, &(_, v)| acc.min(v)),
        };

        values
            .into_iter()
            .find(|&(_, value)| value == root_value)
            .ok_or(Error::NoLegalMove)
    }

    fn response_values(
        search: &mut Search,
        board: &BoardState,
        responder: Role,
    ) -> Vec<(Move, Utility)> {
        successors(board)
            .filter_map(|child| {
                let value = search.value_for(&child, responder);
                child.last_move.map(|mv| (mv, value))
            })
            .collect()
    }
}
