//! Match runner: plays a series of games between two agents

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{BoardState, Game, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed for the agents
    pub seed: Option<u64>,

    /// Which player opens every game
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            first_player: Player::X,
        }
    }
}

/// Result of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the agent playing X
    pub x_agent: String,

    /// Name of the agent playing O
    pub o_agent: String,

    /// Total games played
    pub total_games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchResult {
    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Games won by `player`
    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Plays games between an X agent and an O agent
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play the configured number of games.
    ///
    /// `on_game` is called after every finished game with its index and record.
    #[instrument(skip_all, fields(x = x_agent.name(), o = o_agent.name(), games = self.config.games))]
    pub fn run<F>(
        &self,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
        mut on_game: F,
    ) -> Result<MatchResult>
    where
        F: FnMut(usize, &Game),
    {
        if let Some(seed) = self.config.seed {
            x_agent.set_rng_seed(seed)?;
            o_agent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut result = MatchResult {
            x_agent: x_agent.name().to_string(),
            o_agent: o_agent.name().to_string(),
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        };

        for game_num in 0..self.config.games {
            let game = self.play_game(x_agent, o_agent)?;
            match game.outcome {
                Some(GameOutcome::Win(Player::X)) => result.x_wins += 1,
                Some(GameOutcome::Win(Player::O)) => result.o_wins += 1,
                Some(GameOutcome::Draw) => result.draws += 1,
                None => unreachable!("play_game only returns finished games"),
            }
            result.total_games += 1;
            debug!(game = game_num, outcome = ?game.outcome, moves = game.moves.len(), "game finished");
            on_game(game_num, &game);
        }

        info!(
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play one game to completion
    pub fn play_game(&self, x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Result<Game> {
        let mut game = Game::starting_from(BoardState::new_with_player(self.config.first_player));
        let mut state = game.initial;

        while !game.is_over() {
            let mv = match state.to_move {
                Player::X => x_agent.select_move(&state)?,
                Player::O => o_agent.select_move(&state)?,
            };
            game.play(mv)?;
            state = state.play(mv)?;
        }

        Ok(game)
    }
}
