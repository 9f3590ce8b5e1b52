//! Game record: starting position, move history and outcome

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Move, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is running
    pub fn of(state: &BoardState) -> Option<Self> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with X to open
    pub fn new() -> Self {
        Self::starting_from(BoardState::new())
    }

    /// Create a game from an arbitrary starting position
    pub fn starting_from(initial: BoardState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for the side to move
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::NoLegalMove);
        }

        let next = self.current_state()?.play(mv)?;
        self.moves.push(mv);
        self.outcome = GameOutcome::of(&next);
        Ok(())
    }

    /// Board states from the initial position through every move
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move is illegal, which indicates corrupted
    /// game data.
    pub fn state_sequence(&self) -> Result<Vec<BoardState>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for &mv in &self.moves {
            state = state.play(mv)?;
            states.push(state);
        }
        Ok(states)
    }

    /// Current board state
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move is illegal.
    pub fn current_state(&self) -> Result<BoardState, crate::Error> {
        self.moves
            .iter()
            .try_fold(self.initial, |state, &mv| state.play(mv))
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
