//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side emptied the other's table.
    Winner(PlayerId),
    /// The turn cap was reached.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        match *self {
            GameResult::Winner(p) => Some(p),
            GameResult::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::BANDIT);
        assert!(!result.is_winner(PlayerId::SHERIFF));
        assert!(result.is_winner(PlayerId::BANDIT));
        assert_eq!(result.winner(), Some(PlayerId::BANDIT));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::SHERIFF));
        assert_eq!(draw.winner(), None);
    }
}
