//! Ordered table of cards in play for one side.
//!
//! Insertion order is play order. The front card (position 0) is the
//! default attack target. Backed by `im::Vector` so snapshots of a table
//! are O(1) to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::EntityId;

/// One side's cards in play.
///
/// ```
/// use duck_duel::cards::{CardId, CardInstance};
/// use duck_duel::core::{EntityId, PlayerId};
/// use duck_duel::zones::Table;
///
/// let mut table = Table::new();
/// table.place(CardInstance::blank(EntityId(0), CardId::new(1), PlayerId::SHERIFF, 2));
/// table.place(CardInstance::blank(EntityId(1), CardId::new(1), PlayerId::SHERIFF, 2));
///
/// assert_eq!(table.front().map(|c| c.entity_id), Some(EntityId(0)));
/// assert_eq!(table.position_of(EntityId(1)), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    cards: Vector<CardInstance>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card at the back of the table.
    pub fn place(&mut self, card: CardInstance) {
        self.cards.push_back(card);
    }

    /// The default attack target.
    #[must_use]
    pub fn front(&self) -> Option<&CardInstance> {
        self.cards.front()
    }

    /// Card at a table position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&CardInstance> {
        self.cards.get(position)
    }

    /// Position of a card on this table.
    #[must_use]
    pub fn position_of(&self, entity: EntityId) -> Option<usize> {
        self.cards.iter().position(|c| c.entity_id == entity)
    }

    /// Find a card by entity.
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.entity_id == entity)
    }

    /// Find a card by entity, mutably.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut CardInstance> {
        self.cards.iter_mut().find(|c| c.entity_id == entity)
    }

    /// Remove a card, keeping the order of the rest.
    pub fn remove(&mut self, entity: EntityId) -> Option<CardInstance> {
        let position = self.position_of(entity)?;
        Some(self.cards.remove(position))
    }

    /// Number of cards in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Cards front to back, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.cards.iter_mut()
    }

    /// Entity IDs front to back.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.cards.iter().map(|c| c.entity_id)
    }
}
