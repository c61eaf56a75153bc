//! Card definitions - static per-kind data.
//!
//! `CardDefinition` holds everything shared by all cards of one kind:
//! name, base power, capability tags, innate abilities, how it attacks.
//! Instance-specific data (current power, abilities after theft) lives
//! in `CardInstance`.

use serde::{Deserialize, Serialize};

use super::capabilities::{Capabilities, Classification};
use crate::abilities::{Ability, AbilitySet, Modifier};

/// Identifier of a card kind.
///
/// All instances of "Trasher" share one `CardId`. Theft targets and
/// population counters are keyed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// How a card picks its targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackStyle {
    /// The front card of the opposing table.
    #[default]
    Front,
    /// Every opposing card in table order, each for a fixed base damage.
    Sweep { damage: u32 },
    /// The front card and every other opposing card of the same
    /// classification, in table order.
    Kindred,
}

/// Something a card does right before it attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreAttack {
    /// Take the innate abilities of every opposing card sharing the
    /// front card's kind.
    StealAbilities,
    /// Every duck on both tables gains max power, then heals.
    Brew { max_power_gain: u32, heal: u32 },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duck_duel::abilities::{Ability, Modifier};
/// use duck_duel::cards::{Capabilities, CardDefinition, CardId};
///
/// let trasher = CardDefinition::new(CardId::new(3), "Trasher", 5)
///     .with_capabilities(Capabilities::DOG)
///     .with_modifier(Ability::TakeDamage, Modifier::Shield(1));
///
/// assert_eq!(trasher.power, 5);
/// assert_eq!(trasher.descriptions()[0], "Dog");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Kind identifier.
    pub id: CardId,

    /// Card name (for display/logging).
    pub name: String,

    /// Base power; also the starting max power.
    pub power: u32,

    /// Capability tags.
    pub capabilities: Capabilities,

    /// Innate ability modifiers, copied onto each instance.
    pub abilities: AbilitySet,

    /// Target selection.
    pub attack: AttackStyle,

    /// Optional action before attacking.
    pub pre_attack: Option<PreAttack>,

    /// Is this kind population-counted?
    pub counted: bool,
}

impl CardDefinition {
    /// Create a plain creature with no abilities.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, power: u32) -> Self {
        Self {
            id,
            name: name.into(),
            power,
            capabilities: Capabilities::empty(),
            abilities: AbilitySet::new(),
            attack: AttackStyle::Front,
            pre_attack: None,
            counted: false,
        }
    }

    /// Set capability tags (builder pattern).
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Add an innate modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, ability: Ability, modifier: Modifier) -> Self {
        self.abilities = self.abilities.with(ability, modifier);
        self
    }

    /// Set the attack style (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: AttackStyle) -> Self {
        self.attack = attack;
        self
    }

    /// Set the pre-attack action (builder pattern).
    #[must_use]
    pub fn with_pre_attack(mut self, pre_attack: PreAttack) -> Self {
        self.pre_attack = Some(pre_attack);
        self
    }

    /// Count live cards of this kind (builder pattern).
    #[must_use]
    pub fn counted(mut self) -> Self {
        self.counted = true;
        self
    }

    /// Classification from capability tags.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.capabilities.classify()
    }

    /// Description lines: classification first, then abilities.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        let mut lines = vec![self.classification().label().to_string()];

        match self.attack {
            AttackStyle::Front => {}
            AttackStyle::Sweep { damage } => lines.push(format!("hits every opponent for {damage}")),
            AttackStyle::Kindred => lines.push("hits the target and all its kin".to_string()),
        }
        match self.pre_attack {
            None => {}
            Some(PreAttack::StealAbilities) => lines.push("steals abilities before attacking".to_string()),
            Some(PreAttack::Brew { .. }) => lines.push("brews for every duck before attacking".to_string()),
        }
        lines.extend(self.abilities.iter().map(|(ability, grant)| grant.modifier.describe(ability)));

        lines
    }
}
