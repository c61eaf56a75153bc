//! The standard card catalog.
//!
//! | kind        | power | tags          | behaviour                                  |
//! |-------------|-------|---------------|--------------------------------------------|
//! | Duck        | 2     | duck          | -                                          |
//! | Dog         | 3     | dog           | -                                          |
//! | Trasher     | 5     | dog           | takes 1 less damage                        |
//! | Gatling     | 6     | -             | hits every opponent for 2, one at a time   |
//! | Lad         | 2     | dog           | pack bonus on dealt and taken damage       |
//! | Rogue       | 2     | -             | steals abilities before attacking          |
//! | Brewer      | 2     | duck          | ducks gain 1 max power and heal 2          |
//! | PseudoDuck  | 3     | dog, duck     | -                                          |
//! | Retriever   | 2     | dog           | hits the target and all its kin            |

use super::capabilities::Capabilities;
use super::definition::{AttackStyle, CardDefinition, CardId, PreAttack};
use super::registry::CardRegistry;
use crate::abilities::{Ability, Modifier};

pub const DUCK: CardId = CardId::new(1);
pub const DOG: CardId = CardId::new(2);
pub const TRASHER: CardId = CardId::new(3);
pub const GATLING: CardId = CardId::new(4);
pub const LAD: CardId = CardId::new(5);
pub const ROGUE: CardId = CardId::new(6);
pub const BREWER: CardId = CardId::new(7);
pub const PSEUDO_DUCK: CardId = CardId::new(8);
pub const RETRIEVER: CardId = CardId::new(9);

/// Every kind in the standard catalog.
#[must_use]
pub fn standard() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(DUCK, "Duck", 2).with_capabilities(Capabilities::DUCK),
        CardDefinition::new(DOG, "Dog", 3).with_capabilities(Capabilities::DOG),
        CardDefinition::new(TRASHER, "Trasher", 5)
            .with_capabilities(Capabilities::DOG)
            .with_modifier(Ability::TakeDamage, Modifier::Shield(1)),
        CardDefinition::new(GATLING, "Gatling", 6).with_attack(AttackStyle::Sweep { damage: 2 }),
        CardDefinition::new(LAD, "Lad", 2)
            .with_capabilities(Capabilities::DOG)
            .with_modifier(Ability::DealToCreature, Modifier::PackBonus { kind: LAD })
            .with_modifier(Ability::TakeDamage, Modifier::PackBonus { kind: LAD })
            .counted(),
        CardDefinition::new(ROGUE, "Rogue", 2).with_pre_attack(PreAttack::StealAbilities),
        CardDefinition::new(BREWER, "Brewer", 2)
            .with_capabilities(Capabilities::DUCK)
            .with_pre_attack(PreAttack::Brew { max_power_gain: 1, heal: 2 }),
        CardDefinition::new(PSEUDO_DUCK, "PseudoDuck", 3).with_capabilities(Capabilities::DOG | Capabilities::DUCK),
        CardDefinition::new(RETRIEVER, "Retriever", 2)
            .with_capabilities(Capabilities::DOG)
            .with_attack(AttackStyle::Kindred),
    ]
}

impl CardRegistry {
    /// A registry holding the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        standard().into_iter().fold(Self::new(), Self::with)
    }
}
