//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
                label: s.to_string(),
            }),
        }
    }
}

/// A cell coordinate: row and column, each in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move, rejecting coordinates off the 3x3 grid
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= 3 || col >= 3 {
            return Err(crate::Error::InvalidCoordinate { row, col });
        }
        Ok(Move { row, col })
    }

    /// Create a move from a row-major cell index (0-8)
    pub fn from_position(pos: usize) -> Result<Self, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        Ok(Move {
            row: pos / 3,
            col: pos % 3,
        })
    }

    /// Row-major cell index (0-8)
    pub fn position(self) -> usize {
        self.row * 3 + self.col
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..3).flat_map(|row| (0..3).map(move |col| Move { row, col }))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state: cells, whose turn it is, and the move that produced it
///
/// This type is `Copy`; every operation that changes the board returns a new,
/// independently owned value and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
    /// The move that produced this board from its parent (`None` for a root)
    pub last_move: Option<Move>,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimax_ttt::tictactoe::{BoardState, Player};
    ///
    /// let o_first = BoardState::new_with_player(Player::O);
    /// assert_eq!(o_first.to_move, Player::O);
    /// assert_eq!(o_first.make_move(4).unwrap().to_move, Player::X);
    /// ```
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
            last_move: None,
        }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    fn ensure_turn_consistent_with_counts(
        count: &PieceCount,
        player: Player,
        context: &str,
    ) -> Result<(), crate::Error> {
        let valid = match player {
            Player::X => count.x == count.o || count.o == count.x + 1,
            Player::O => count.x == count.o || count.x == count.o + 1,
        };

        if valid {
            Ok(())
        } else {
            Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {player} to move in '{context}'",
                    count.x, count.o,
                ),
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cells in row-major order (whitespace is filtered out)
    /// and may end with `_X` or `_O` (either case) to name the player to move. Without the
    /// suffix the player is inferred from the piece counts, X opening.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not hold exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - A provided `_X`/`_O` suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        let to_move = if let Some(turn) = specified_turn {
            Self::ensure_turn_consistent_with_counts(&count, turn, s).map(|_| turn)?
        } else {
            Self::determine_turn_from_counts(&count)?
        };

        Ok(BoardState {
            cells,
            to_move,
            last_move: None,
        })
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>), crate::Error> {
        match cleaned.split_once('_') {
            Some((board, suffix)) => {
                let player = suffix.parse::<Player>().map_err(|_| {
                    crate::Error::InvalidPlayerString {
                        player: suffix.to_string(),
                        label: cleaned.to_string(),
                    }
                })?;
                Ok((board, Some(player)))
            }
            None => Ok((cleaned, None)),
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Occupant of row-major cell `pos`, or `None` past the last cell
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Occupant of `(row, col)`, or `None` off the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Move::new(row, col).ok().map(|mv| self.cells[mv.position()])
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cell is left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy of this board with a different player to move
    #[must_use = "with_turn returns a new board state; the original is unchanged"]
    pub fn with_turn(&self, player: Player) -> Self {
        let mut next = *self;
        next.to_move = player;
        next
    }

    /// Copy of this board with `mark` written at `mv`. The turn is not changed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMove` if the target cell is occupied.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, mv: Move, mark: Player) -> Result<BoardState, crate::Error> {
        let pos = mv.position();
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = mark.to_cell();
        next.last_move = Some(mv);
        Ok(next)
    }

    /// Place the mark of the player to move and pass the turn
    #[must_use = "play returns a new board state; the original is unchanged"]
    pub fn play(&self, mv: Move) -> Result<BoardState, crate::Error> {
        let next = self.place(mv, self.to_move)?;
        Ok(next.with_turn(self.to_move.opponent()))
    }

    /// Positional form of [`play`](Self::play)
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        self.play(Move::from_position(pos)?)
    }

    /// Legal moves in this position (empty cells while the game is running)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        Move::all()
            .filter(|mv| self.is_empty(mv.position()))
            .collect()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if `mark` has a line. `Cell::Empty` answers `false`.
    pub fn has_mark_won(&self, mark: Cell) -> bool {
        LineAnalyzer::has_line(&self.cells, mark)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Get a canonical string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move.to_char()
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
