//! One-ply expansion of a board

use crate::tictactoe::{BoardState, Move};

/// Every board reachable by the side to move in one ply.
///
/// Empty cells are visited in row-major order, which the decision procedure
/// relies on to break ties. Each successor is a fresh copy with the mover's
/// mark placed, `last_move` set, and the turn passed to the opponent. The
/// expansion ignores wins: a full board yields nothing, a won board with empty
/// cells still yields successors.
pub fn successors(board: &BoardState) -> impl Iterator<Item = BoardState> + '_ {
    Move::all()
        .filter(move |mv| board.is_empty(mv.position()))
        .filter_map(move |mv| board.play(mv).ok())
}
