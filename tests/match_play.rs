//! Match play between the minimax engine and baseline agents

use minimax_ttt::{
    pipeline::{MatchConfig, MatchRunner, MinimaxAgent, RandomAgent},
    tictactoe::{GameOutcome, Player},
};
use tempfile::tempdir;

fn config(games: usize, seed: u64, first_player: Player) -> MatchConfig {
    MatchConfig {
        games,
        seed: Some(seed),
        first_player,
    }
}

mod against_random {
    use super::*;

    #[test]
    fn minimax_as_x_never_loses() {
        let runner = MatchRunner::new(config(30, 1, Player::X));
        let mut x = MinimaxAgent::new("Minimax".to_string());
        let mut o = RandomAgent::new("Random".to_string());
        let result = runner.run(&mut x, &mut o, |_, _| {}).unwrap();

        assert_eq!(result.total_games, 30);
        assert_eq!(result.o_wins, 0);
        assert!(result.x_wins > 0, "random play should concede some games");
    }

    #[test]
    fn minimax_as_o_never_loses() {
        let runner = MatchRunner::new(config(30, 2, Player::X));
        let mut x = RandomAgent::new("Random".to_string());
        let mut o = MinimaxAgent::new("Minimax".to_string());
        let result = runner.run(&mut x, &mut o, |_, _| {}).unwrap();

        assert_eq!(result.x_wins, 0);
        assert_eq!(result.o_wins + result.draws, 30);
    }

    #[test]
    fn o_opening_games_are_recorded() {
        let runner = MatchRunner::new(config(5, 3, Player::O));
        let mut x = RandomAgent::new("Random".to_string());
        let mut o = MinimaxAgent::new("Minimax".to_string());
        let mut outcomes = Vec::new();
        runner
            .run(&mut x, &mut o, |_, game| {
                assert_eq!(game.initial.to_move, Player::O);
                outcomes.push(game.outcome);
            })
            .unwrap();

        assert_eq!(outcomes.len(), 5);
        assert!(
            outcomes
                .iter()
                .all(|o| matches!(o, Some(GameOutcome::Draw) | Some(GameOutcome::Win(Player::O))))
        );
    }
}

mod persistence {
    use super::*;

    #[test]
    fn result_roundtrips_through_json_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("result.json");

        let runner = MatchRunner::new(config(4, 9, Player::X));
        let mut x = MinimaxAgent::new("Minimax X".to_string());
        let mut o = MinimaxAgent::new("Minimax O".to_string());
        let result = runner.run(&mut x, &mut o, |_, _| {}).unwrap();
        assert_eq!(result.draws, 4);

        result.save(&path).unwrap();
        let loaded = minimax_ttt::pipeline::MatchResult::load(&path).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn loading_a_missing_file_reports_the_path() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing.json");
        let err = minimax_ttt::pipeline::MatchResult::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"), "{err}");
    }
}
