//! Terminal detection and payoffs from the maximizer's point of view

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Cell, Player};

/// Payoff of a finished game for the maximizer: one of `LOSS`, `DRAW`, `WIN`
pub type Utility = i32;

pub const WIN: Utility = 1;
pub const DRAW: Utility = 0;
pub const LOSS: Utility = -1;

/// The two search roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }
}

/// Which mark plays the maximizer in one search.
///
/// Fixed for the whole tree walk; the minimizer is always the other mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Perspective {
    maximizer: Player,
}

impl Perspective {
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    /// The perspective in which the side to move at `root` maximizes
    pub fn of_side_to_move(root: &BoardState) -> Self {
        Self::new(root.to_move)
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    pub fn minimizer(&self) -> Player {
        self.maximizer.opponent()
    }

    /// The mark assigned to `role`
    pub fn player(&self, role: Role) -> Player {
        match role {
            Role::Maximizer => self.maximizer(),
            Role::Minimizer => self.minimizer(),
        }
    }

    /// The role `player` holds in this search
    pub fn role_of(&self, player: Player) -> Role {
        if player == self.maximizer {
            Role::Maximizer
        } else {
            Role::Minimizer
        }
    }

    /// Whether the side holding `role` has three in a line
    pub fn has_line(&self, board: &BoardState, role: Role) -> bool {
        board.has_mark_won(self.player(role).to_cell())
    }

    /// The same search with the roles swapped
    pub fn flipped(&self) -> Self {
        Self::new(self.minimizer())
    }
}

/// A board is terminal once either side has a line or no cell is empty
pub fn is_terminal(board: &BoardState) -> bool {
    board.has_mark_won(Cell::X) || board.has_mark_won(Cell::O) || board.is_full()
}

/// Payoff of `board` for the maximizer of `perspective`.
///
/// Only meaningful on terminal boards; a running game evaluates to `DRAW`.
pub fn utility(board: &BoardState, perspective: Perspective) -> Utility {
    if perspective.has_line(board, Role::Maximizer) {
        WIN
    } else if perspective.has_line(board, Role::Minimizer) {
        LOSS
    } else {
        DRAW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(is_terminal(&board));
        assert_eq!(utility(&board, Perspective::new(Player::X)), DRAW);
        assert_eq!(utility(&board, Perspective::new(Player::O)), DRAW);
    }

    #[test]
    fn minimizer_line_is_a_loss_even_with_empty_cells() {
        // O owns the left column; cells remain empty
        let board = BoardState::from_string("OX.OX.O.X_X").unwrap();
        let perspective = Perspective::new(Player::X);
        assert!(is_terminal(&board));
        assert_eq!(utility(&board, perspective), LOSS);
        assert_eq!(utility(&board, perspective.flipped()), WIN);
    }

    #[test]
    fn running_game_is_not_terminal_and_scores_zero() {
        let board = BoardState::from_string("X...O....").unwrap();
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board, Perspective::new(Player::X)), DRAW);
    }

    #[test]
    fn roles_follow_the_perspective() {
        let perspective = Perspective::new(Player::O);
        assert_eq!(perspective.role_of(Player::O), Role::Maximizer);
        assert_eq!(perspective.role_of(Player::X), Role::Minimizer);
        assert_eq!(perspective.player(Role::Minimizer), Player::X);
        assert_eq!(Role::Maximizer.opposite(), Role::Minimizer);
    }
}
