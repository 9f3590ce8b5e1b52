//! Exhaustive properties of the search over the whole game tree

use minimax_ttt::{
    search::{
        DRAW, LOSS, Minimax, Perspective, SearchConfig, Selection, WIN, decide, is_terminal, reachable_positions,
        successors, utility, verify_all,
    },
    tictactoe::{BoardState, Cell, Player},
};

mod successor_generation {
    use super::*;

    #[test]
    fn every_successor_adds_one_mark_for_the_mover() {
        for state in reachable_positions(Player::X) {
            let empty = state.empty_positions();
            let children: Vec<BoardState> = successors(&state).collect();
            assert_eq!(children.len(), empty.len(), "{}", state.encode());

            for (child, &pos) in children.iter().zip(empty.iter()) {
                let mv = child.last_move.expect("successor records its move");
                assert_eq!(mv.position(), pos, "row-major order at {}", state.encode());
                assert_eq!(child.to_move, state.to_move.opponent());

                let changed: Vec<usize> = (0..9)
                    .filter(|&i| child.cells[i] != state.cells[i])
                    .collect();
                assert_eq!(changed, vec![pos]);
                assert_eq!(child.cells[pos], state.to_move.to_cell());
            }
        }
    }
}

mod terminal_evaluation {
    use super::*;

    #[test]
    fn terminal_utilities_are_bounded_and_antisymmetric() {
        let mut terminals = 0;
        for state in reachable_positions(Player::X) {
            if !is_terminal(&state) {
                continue;
            }
            terminals += 1;
            let x = utility(&state, Perspective::new(Player::X));
            let o = utility(&state, Perspective::new(Player::O));
            assert!([LOSS, DRAW, WIN].contains(&x));
            assert_eq!(x, -o, "{}", state.encode());

            match state.winner() {
                Some(Player::X) => assert_eq!(x, WIN),
                Some(Player::O) => assert_eq!(x, LOSS),
                None => {
                    assert!(!state.cells.contains(&Cell::Empty));
                    assert_eq!(x, DRAW);
                }
            }
        }
        assert_eq!(terminals, 958);
    }
}

mod optimality {
    use super::*;

    /// Walk every line of play where `engine_side` follows `decide` and the
    /// other side tries every reply. Returns the worst outcome reached for
    /// `engine_side`.
    fn worst_outcome(state: &BoardState, engine_side: Player) -> i32 {
        if is_terminal(state) {
            return utility(state, Perspective::new(engine_side));
        }
        if state.to_move == engine_side {
            let mv = decide(state).expect("non-terminal board has a move");
            worst_outcome(&state.play(mv).unwrap(), engine_side)
        } else {
            successors(state)
                .map(|child| worst_outcome(&child, engine_side))
                .min()
                .expect("non-terminal board has successors")
        }
    }

    #[test]
    fn x_never_loses_from_the_empty_board() {
        assert!(worst_outcome(&BoardState::new(), Player::X) >= DRAW);
    }

    #[test]
    fn o_never_loses_when_replying() {
        assert!(worst_outcome(&BoardState::new(), Player::O) >= DRAW);
    }

    #[test]
    fn perfect_play_draws() {
        let mut state = BoardState::new();
        while !is_terminal(&state) {
            state = state.play(decide(&state).unwrap()).unwrap();
        }
        assert!(state.is_draw());
    }

    #[test]
    fn rescan_and_reuse_choose_the_same_move() {
        let rescan = Minimax::new(SearchConfig::new().with_selection(Selection::Rescan));
        let reuse = Minimax::new(SearchConfig::new().with_selection(Selection::Reuse));
        for state in reachable_positions(Player::O).iter().filter(|s| s.occupied_count() >= 4) {
            if is_terminal(state) {
                continue;
            }
            let a = rescan.evaluate(state).unwrap();
            let b = reuse.evaluate(state).unwrap();
            assert_eq!(a.mv, b.mv, "{}", state.encode());
            assert_eq!(a.value, b.value, "{}", state.encode());
            assert_eq!(a.mv, decide(state).unwrap(), "{}", state.encode());
        }
    }
}

mod reference_check {
    use super::*;

    #[test]
    fn minimax_agrees_with_negamax_everywhere() {
        let positions = reachable_positions(Player::X);
        let mut calls = 0;
        let report = verify_all(Player::X, |done, total| {
            calls += 1;
            assert_eq!(total, positions.len());
            assert_eq!(done, calls);
        })
        .expect("minimax must agree with the reference solver");

        assert_eq!(report.positions, positions.len());
        assert_eq!(
            report.decisions,
            positions.iter().filter(|s| !s.is_terminal()).count()
        );
        assert_eq!(report.wins + report.draws + report.losses, report.decisions);
    }
}
