//! Builder for creating a [`Game`].

use std::rc::Rc;

use crate::cards::{CardId, CardRegistry};
use crate::core::{GameConfig, GameError, GameState, PlayerId, PlayerMap};
use crate::view::{NullView, View};

use super::game_loop::Game;

/// Builder for creating a [`Game`].
///
/// ```
/// use duck_duel::cards::catalog::{DOG, DUCK};
/// use duck_duel::cards::CardRegistry;
/// use duck_duel::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player_names("Sheriff Uclick", "Tex")
///     .max_turns(50)
///     .build(CardRegistry::standard(), &[DUCK, DUCK], &[DOG])
///     .unwrap();
///
/// assert_eq!(game.state().config.max_turns, 50);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    view: Rc<dyn View>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            view: Rc::new(NullView),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, sheriff: impl Into<String>, bandit: impl Into<String>) -> Self {
        self.config.player_names = [sheriff.into(), bandit.into()];
        self
    }

    pub fn starting_life(mut self, life: u32) -> Self {
        self.config.starting_life = life;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.config.first_player = player;
        self
    }

    pub fn max_turns(mut self, turns: u32) -> Self {
        self.config.max_turns = turns;
        self
    }

    pub fn view(mut self, view: Rc<dyn View>) -> Self {
        self.view = view;
        self
    }

    /// Build the game. Decks are card kinds in play order.
    pub fn build(self, registry: CardRegistry, sheriff: &[CardId], bandit: &[CardId]) -> Result<Game, GameError> {
        let decks = PlayerMap::new(|player| if player == PlayerId::SHERIFF { sheriff.to_vec() } else { bandit.to_vec() });

        for (player, deck) in decks.iter() {
            if deck.is_empty() {
                return Err(GameError::EmptyDeck(player));
            }
            if let Some(&unknown) = deck.iter().find(|kind| !registry.contains(**kind)) {
                return Err(GameError::UnknownCard(unknown));
            }
        }

        let state = GameState::new(self.config, registry, self.view);
        Ok(Game::new(state, decks))
    }
}
