//! Configuration for the minimax engine.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Player};

use super::terminal::Perspective;

/// How `decide` maps the root value back to a move.
///
/// Both strategies select the first successor in row-major order whose
/// opponent-response value equals the root value, so they always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Compute the root value, then recompute every successor's value while scanning
    #[default]
    Rescan,
    /// Compute every successor's value once and reuse it for the scan
    Reuse,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Rescan => "rescan",
            Selection::Reuse => "reuse",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selection {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rescan" => Ok(Selection::Rescan),
            "reuse" => Ok(Selection::Reuse),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown selection '{other}' (expected 'rescan' or 'reuse')"),
            }),
        }
    }
}

/// Settings for a [`Minimax`](super::Minimax) engine.
///
/// # Examples
///
/// ```
/// use minimax_ttt::search::{SearchConfig, Selection};
/// use minimax_ttt::tictactoe::Player;
///
/// let config = SearchConfig::new()
///     .with_maximizer(Player::O)
///     .with_selection(Selection::Reuse);
/// assert_eq!(config.maximizer, Some(Player::O));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mark that maximizes; `None` picks the side to move at the root
    pub maximizer: Option<Player>,
    /// Move selection strategy
    pub selection: Selection,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the maximizing mark instead of deriving it from the root
    pub fn with_maximizer(mut self, maximizer: Player) -> Self {
        self.maximizer = Some(maximizer);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// The perspective a search rooted at `root` runs under
    pub fn perspective_for(&self, root: &BoardState) -> Perspective {
        match self.maximizer {
            Some(player) => Perspective::new(player),
            None => Perspective::of_side_to_move(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derives_maximizer_from_root() {
        let config = SearchConfig::default();
        let root = BoardState::new_with_player(Player::O);
        assert_eq!(config.perspective_for(&root).maximizer(), Player::O);
        assert_eq!(config.selection, Selection::Rescan);
    }

    #[test]
    fn fixed_maximizer_ignores_turn() {
        let config = SearchConfig::new().with_maximizer(Player::X);
        let root = BoardState::new_with_player(Player::O);
        assert_eq!(config.perspective_for(&root).maximizer(), Player::X);
    }

    #[test]
    fn selection_parses_case_insensitively() {
        assert_eq!("Reuse".parse::<Selection>().unwrap(), Selection::Reuse);
        assert_eq!(" rescan ".parse::<Selection>().unwrap(), Selection::Rescan);
        assert!("fastest".parse::<Selection>().is_err());
    }

    #[test]
    fn config_serializes_selection_in_lowercase() {
        let config = SearchConfig::new().with_selection(Selection::Reuse);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"reuse\""), "{json}");
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
