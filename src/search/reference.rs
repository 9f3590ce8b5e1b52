//! Independent negamax solver and an exhaustive cross-check of the minimax engine
//!
//! The reference scores positions from the side to move rather than from a
//! fixed maximizer, so it shares no evaluation code with [`super::minimax`].

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{
    config::{SearchConfig, Selection},
    minimax::{Minimax, max_value, min_value},
    terminal::{Perspective, Utility},
};
use crate::{
    Error, Result,
    tictactoe::{BoardState, Cell, Player},
};

/// Value of `board` for the side to move: 1 win, 0 draw, -1 loss
pub fn negamax(board: &BoardState) -> Utility {
    let just_moved = board.to_move.opponent();
    if board.has_won(just_moved) {
        return -1;
    }
    if board.has_won(board.to_move) {
        return 1;
    }

    let mut best: Option<Utility> = None;
    for (pos, &cell) in board.cells.iter().enumerate() {
        if cell != Cell::Empty {
            continue;
        }
        let mut child = *board;
        child.cells[pos] = board.to_move.to_cell();
        child.to_move = just_moved;
        let score = -negamax(&child);
        best = Some(best.map_or(score, |b| b.max(score)));
    }

    best.unwrap_or(0)
}

/// Reference value of `board` for the maximizer of `perspective`
pub fn reference_value(board: &BoardState, perspective: Perspective) -> Utility {
    let value = negamax(board);
    if board.to_move == perspective.maximizer() {
        value
    } else {
        -value
    }
}

/// Every distinct position reachable from the empty board, sorted by encoding.
///
/// Expansion stops at won or full boards. Positions are returned as roots
/// (`last_move` cleared).
pub fn reachable_positions(first: Player) -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut found = BTreeMap::new();
    let mut stack = vec![BoardState::new_with_player(first)];

    while let Some(state) = stack.pop() {
        let key = state.encode();
        if !seen.insert(key.clone()) {
            continue;
        }
        found.insert(
            key,
            BoardState {
                last_move: None,
                ..state
            },
        );

        for mv in state.legal_moves() {
            if let Ok(next) = state.play(mv) {
                stack.push(next);
            }
        }
    }

    found.into_values().collect()
}

/// Counts gathered by [`verify_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Positions checked
    pub positions: usize,
    /// Positions with a move to choose
    pub decisions: usize,
    /// Non-terminal positions by value for the side to move
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

/// Cross-check the minimax engine on every position reachable when `first` opens.
///
/// For each position both value functions must match the reference under both
/// perspectives. For each position with a move to make, both selection
/// strategies must pick the same move and that move must attain the root value.
/// `on_progress` is called once per position with `(done, total)`.
///
/// # Errors
///
/// Returns `Error::VerificationFailed` on the first disagreement.
#[instrument(skip(on_progress))]
pub fn verify_all<F>(first: Player, mut on_progress: F) -> Result<VerificationReport>
where
    F: FnMut(usize, usize),
{
    let positions = reachable_positions(first);
    let total = positions.len();
    let rescan = Minimax::new(SearchConfig::new().with_selection(Selection::Rescan));
    let reuse = Minimax::new(SearchConfig::new().with_selection(Selection::Reuse));
    let mut report = VerificationReport::default();

    for (done, state) in positions.iter().enumerate() {
        check_values(state)?;

        if !state.is_terminal() {
            let expected = negamax(state);
            let chosen = rescan.evaluate(state)?;
            let threaded = reuse.evaluate(state)?;

            if chosen.mv != threaded.mv {
                return Err(mismatch(
                    state,
                    format!("rescan chose {} but reuse chose {}", chosen.mv, threaded.mv),
                ));
            }
            if chosen.value != expected {
                return Err(mismatch(
                    state,
                    format!("root value {} but reference {expected}", chosen.value),
                ));
            }
            let after = state.play(chosen.mv)?;
            if -negamax(&after) != expected {
                return Err(mismatch(
                    state,
                    format!("move {} does not attain the root value", chosen.mv),
                ));
            }

            report.decisions += 1;
            match expected {
                1 => report.wins += 1,
                -1 => report.losses += 1,
                _ => report.draws += 1,
            }
        }

        report.positions += 1;
        on_progress(done + 1, total);
    }

    info!(
        positions = report.positions,
        decisions = report.decisions,
        "verification passed"
    );
    Ok(report)
}

fn check_values(state: &BoardState) -> Result<()> {
    for maximizer in [Player::X, Player::O] {
        let perspective = Perspective::new(maximizer);
        let expected = reference_value(state, perspective);
        let actual = if state.to_move == maximizer {
            max_value(state, perspective)
        } else {
            min_value(state, perspective)
        };
        if actual != expected {
            return Err(mismatch(
                state,
                format!("value {actual} for maximizer {maximizer}, reference {expected}"),
            ));
        }
    }
    Ok(())
}

fn mismatch(state: &BoardState, message: String) -> Error {
    Error::VerificationFailed {
        state: state.encode(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_position_count_matches_known_total() {
        assert_eq!(reachable_positions(Player::X).len(), 5478);
        assert_eq!(reachable_positions(Player::O).len(), 5478);
    }

    #[test]
    fn reachable_positions_are_valid_roots() {
        let positions = reachable_positions(Player::X);
        assert!(positions.iter().all(BoardState::is_valid));
        assert!(positions.iter().all(|s| s.last_move.is_none()));
    }

    #[test]
    fn negamax_scores_from_side_to_move() {
        // X completed a line and O is to move: O has lost
        let won = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(negamax(&won), -1);
        assert_eq!(reference_value(&won, Perspective::new(Player::X)), 1);

        // X to move wins at once
        let winning = BoardState::from_string("XX.OO....").unwrap();
        assert_eq!(negamax(&winning), 1);

        assert_eq!(negamax(&BoardState::new()), 0);
    }
}
