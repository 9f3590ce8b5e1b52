//! Winning line checks for the 3x3 board

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board (row-major cell positions)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three marks in a row, column or diagonal
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::has_line(cells, player.to_cell())
    }

    /// Check if `mark` fills any winning line.
    ///
    /// Total over every `Cell`: asking about `Cell::Empty` is not a side and
    /// always answers `false`.
    pub fn has_line(cells: &[Cell; 9], mark: Cell) -> bool {
        if mark == Cell::Empty {
            return false;
        }
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == mark))
    }

    /// Positions that would complete a line for `player` right now, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect()
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn empty_mark_never_has_a_line() {
        let cells = [Cell::Empty; 9];
        assert!(!LineAnalyzer::has_line(&cells, Cell::Empty));

        let mut full = [Cell::X; 9];
        full[4] = Cell::O;
        assert!(!LineAnalyzer::has_line(&full, Cell::Empty));
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_is_not_a_winning_move() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
