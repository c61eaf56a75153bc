//! Game configuration.
//!
//! `GameConfig` carries the knobs a session is created with. Defaults
//! follow the classic sheriff-versus-bandit setup: 10 life per player,
//! the sheriff moves first, and a generous turn cap that only matters
//! for stalemates (for example a shielded card facing 1-power attackers).

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Default life total for each player.
pub const DEFAULT_LIFE: u32 = 10;

/// Default turn cap before the game is declared a draw.
pub const DEFAULT_MAX_TURNS: u32 = 1_000;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, sheriff first.
    pub player_names: [String; 2],

    /// Starting life for each player.
    pub starting_life: u32,

    /// Which side takes the first turn.
    pub first_player: PlayerId,

    /// Number of turns after which the game ends in a draw.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["Sheriff".to_string(), "Bandit".to_string()],
            starting_life: DEFAULT_LIFE,
            first_player: PlayerId::SHERIFF,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    /// Display name of a side.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_life, 10);
        assert_eq!(config.first_player, PlayerId::SHERIFF);
        assert_eq!(config.player_name(PlayerId::BANDIT), "Bandit");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig {
            max_turns: 20,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
