//! Reachability rules for arbitrary board states

use super::{
    board::{BoardState, Cell, Player},
    lines::WINNING_LINES,
};

impl BoardState {
    /// Check if the board could arise in a game of Tic-Tac-Toe.
    ///
    /// Either player may have opened, so piece counts may differ by one in
    /// either direction, but they must agree with the recorded side to move.
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();
        let diff = x_count as isize - o_count as isize;

        let turn_matches = match self.to_move {
            Player::X => diff == 0 || diff == -1,
            Player::O => diff == 0 || diff == 1,
        };
        if !turn_matches {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);
        if x_wins && o_wins {
            return false;
        }

        // The winner moved last, so the turn belongs to the other side
        if x_wins && self.to_move != Player::O {
            return false;
        }
        if o_wins && self.to_move != Player::X {
            return false;
        }

        // Several lines are only possible when one move completed all of them
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let lines: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}
