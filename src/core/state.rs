//! Game state: players, tables, shared ability state, combat log.
//!
//! `GameState` is everything combat reads and writes. It owns both
//! players (and through them both tables), the card registry, the
//! shared ability registry, and the view. Lifecycle hooks and the
//! combat resolver take it by `&mut`, so there is exactly one place
//! where population counters and the theft ledger live.

use std::rc::Rc;

use im::Vector;

use super::config::GameConfig;
use super::entity::EntityId;
use super::error::GameError;
use super::player::{PlayerId, PlayerMap};
use super::record::HitRecord;
use crate::abilities::SharedAbilityRegistry;
use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry};
use crate::combat::lifecycle;
use crate::view::View;
use crate::zones::Table;

/// One side of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Which side this is.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Life total, only reduced by direct strikes.
    pub life: u32,

    /// Cards in play.
    pub table: Table,
}

impl Player {
    /// Create a player with an empty table.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, life: u32) -> Self {
        Self {
            id,
            name: name.into(),
            life,
            table: Table::new(),
        }
    }

    /// Has this player lost? Only an empty table ends the game; life
    /// is bookkeeping for direct strikes.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.table.is_empty()
    }
}

/// Complete session state.
pub struct GameState {
    /// Session configuration.
    pub config: GameConfig,

    /// Card kinds available to this session.
    pub registry: CardRegistry,

    /// Both sides.
    pub players: PlayerMap<Player>,

    /// Population counters and theft ledger.
    pub shared: SharedAbilityRegistry,

    /// Every resolved hit, in order.
    pub log: Vector<HitRecord>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Side whose turn it is.
    pub active_player: PlayerId,

    next_entity: EntityId,
    view: Rc<dyn View>,
}

impl GameState {
    /// Create a session with empty tables.
    #[must_use]
    pub fn new(config: GameConfig, registry: CardRegistry, view: Rc<dyn View>) -> Self {
        let players = PlayerMap::new(|id| Player::new(id, config.player_name(id), config.starting_life));
        let active_player = config.first_player;

        Self {
            config,
            registry,
            players,
            shared: SharedAbilityRegistry::new(),
            log: Vector::new(),
            turn_number: 1,
            active_player,
            next_entity: EntityId(0),
            view,
        }
    }

    /// Shared handle to the view.
    #[must_use]
    pub fn view(&self) -> Rc<dyn View> {
        Rc::clone(&self.view)
    }

    /// Definition of a card kind.
    #[must_use]
    pub fn definition(&self, kind: CardId) -> Option<&CardDefinition> {
        self.registry.get(kind)
    }

    /// Place a new card of `kind` at the back of `player`'s table and
    /// fire its entry hook.
    pub fn deploy(&mut self, player: PlayerId, kind: CardId) -> Result<EntityId, GameError> {
        let definition = self.registry.get(kind).ok_or(GameError::UnknownCard(kind))?;
        let entity = self.next_entity;
        self.next_entity = entity.next();

        let card = CardInstance::new(entity, definition, player);
        self.players[player].table.place(card);
        lifecycle::on_enter(self, entity);

        Ok(entity)
    }

    /// Side and table position of a card in play.
    #[must_use]
    pub fn locate(&self, entity: EntityId) -> Option<(PlayerId, usize)> {
        self.players
            .iter()
            .find_map(|(id, player)| player.table.position_of(entity).map(|pos| (id, pos)))
    }

    /// A card in play.
    #[must_use]
    pub fn card(&self, entity: EntityId) -> Option<&CardInstance> {
        self.players.iter().find_map(|(_, player)| player.table.get(entity))
    }

    /// A card in play, mutably.
    pub fn card_mut(&mut self, entity: EntityId) -> Option<&mut CardInstance> {
        let (owner, _) = self.locate(entity)?;
        self.players[owner].table.get_mut(entity)
    }

    /// Name of a card's kind, for logging.
    #[must_use]
    pub fn card_name(&self, entity: EntityId) -> &str {
        self.card(entity)
            .and_then(|card| self.registry.get(card.card_id))
            .map_or("<gone>", |definition| definition.name.as_str())
    }

    /// Hits logged since `start` (a previous `log.len()`).
    #[must_use]
    pub fn hits_since(&self, start: usize) -> Vec<HitRecord> {
        self.log.iter().skip(start).copied().collect()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("players", &self.players)
            .field("shared", &self.shared)
            .field("log", &self.log)
            .field("turn_number", &self.turn_number)
            .field("active_player", &self.active_player)
            .finish_non_exhaustive()
    }
}
