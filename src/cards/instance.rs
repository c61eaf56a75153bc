//! Card instances - runtime card state.
//!
//! `CardInstance` is one card on a table: its current and max power and
//! its own copy of the kind's abilities, which theft can change.
//!
//! Power is unsigned and all subtraction saturates, so it can never go
//! below zero. A card at zero power is defeated and leaves play.

use serde::{Deserialize, Serialize};

use super::capabilities::Capabilities;
use super::definition::{CardDefinition, CardId};
use crate::abilities::AbilitySet;
use crate::core::{EntityId, PlayerId};

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Kind of this card.
    pub card_id: CardId,

    /// Side that owns the card.
    pub owner: PlayerId,

    /// Current power (doubles as health).
    pub power: u32,

    /// Ceiling for healing.
    pub max_power: u32,

    /// Capability tags, copied from the definition.
    pub capabilities: Capabilities,

    /// This card's abilities, starting as a copy of its kind's.
    pub abilities: AbilitySet,
}

impl CardInstance {
    /// Create an instance of `definition` owned by `owner`.
    #[must_use]
    pub fn new(entity_id: EntityId, definition: &CardDefinition, owner: PlayerId) -> Self {
        Self {
            entity_id,
            card_id: definition.id,
            owner,
            power: definition.power,
            max_power: definition.power,
            capabilities: definition.capabilities,
            abilities: definition.abilities.clone(),
        }
    }

    /// An untagged instance with no abilities.
    #[must_use]
    pub fn blank(entity_id: EntityId, card_id: CardId, owner: PlayerId, power: u32) -> Self {
        Self {
            entity_id,
            card_id,
            owner,
            power,
            max_power: power,
            capabilities: Capabilities::empty(),
            abilities: AbilitySet::new(),
        }
    }

    /// Subtract damage, flooring at zero. Returns the power actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.power);
        self.power -= lost;
        lost
    }

    /// Restore power up to `max_power`. Returns the power actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_power.saturating_sub(self.power));
        self.power += gained;
        gained
    }

    /// Raise the healing ceiling.
    pub fn raise_max_power(&mut self, amount: u32) {
        self.max_power = self.max_power.saturating_add(amount);
    }

    /// Is the card at zero power?
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.power == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{Ability, Modifier};

    fn duck() -> CardInstance {
        let definition = CardDefinition::new(CardId::new(1), "Duck", 2).with_capabilities(Capabilities::DUCK);
        CardInstance::new(EntityId(10), &definition, PlayerId::SHERIFF)
    }

    #[test]
    fn test_card_instance_new() {
        let instance = duck();

        assert_eq!(instance.entity_id, EntityId(10));
        assert_eq!(instance.card_id, CardId::new(1));
        assert_eq!(instance.owner, PlayerId::SHERIFF);
        assert_eq!(instance.power, 2);
        assert_eq!(instance.max_power, 2);
        assert!(instance.capabilities.is_duck());
    }

    #[test]
    fn test_abilities_are_copied_per_instance() {
        let definition = CardDefinition::new(CardId::new(3), "Trasher", 5)
            .with_modifier(Ability::TakeDamage, Modifier::Shield(1));
        let mut first = CardInstance::new(EntityId(1), &definition, PlayerId::BANDIT);
        let second = CardInstance::new(EntityId(2), &definition, PlayerId::BANDIT);

        first.abilities.take_innate(Ability::TakeDamage);

        assert!(first.abilities.is_empty());
        assert_eq!(second.abilities.len(), 1);
        assert_eq!(definition.abilities.len(), 1);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut instance = duck();

        assert_eq!(instance.take_damage(1), 1);
        assert_eq!(instance.power, 1);
        assert!(!instance.is_defeated());

        assert_eq!(instance.take_damage(5), 1);
        assert_eq!(instance.power, 0);
        assert!(instance.is_defeated());

        assert_eq!(instance.take_damage(3), 0);
        assert_eq!(instance.power, 0);
    }

    #[test]
    fn test_heal_caps_at_max_power() {
        let mut instance = duck();
        instance.take_damage(1);

        assert_eq!(instance.heal(2), 1);
        assert_eq!(instance.power, 2);

        instance.raise_max_power(1);
        assert_eq!(instance.heal(2), 1);
        assert_eq!(instance.power, 3);
        assert_eq!(instance.max_power, 3);
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut instance = duck();
        instance.take_damage(1);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
