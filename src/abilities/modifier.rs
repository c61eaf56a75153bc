//! Ability kinds, modifiers, and per-card ability sets.
//!
//! A card's abilities are plain data: for each [`Ability`] kind, an
//! ordered list of [`Grant`]s. Each grant wraps one [`Modifier`] and
//! remembers where it came from, so a card's *innate* abilities can be
//! told apart from ones it stole.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::EntityId;

use super::population::Population;

/// The three damage hooks a card can modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Damage this card deals to an opposing creature.
    DealToCreature,
    /// Damage this card deals directly to the opposing player.
    DealToPlayer,
    /// Damage this card receives.
    TakeDamage,
}

impl Ability {
    /// All ability kinds, in slot order.
    pub const ALL: [Ability; 3] = [Ability::DealToCreature, Ability::DealToPlayer, Ability::TakeDamage];

    const fn slot(self) -> usize {
        match self {
            Ability::DealToCreature => 0,
            Ability::DealToPlayer => 1,
            Ability::TakeDamage => 2,
        }
    }

    /// Is this a dealt-damage hook (as opposed to taken damage)?
    #[must_use]
    pub const fn is_dealt(self) -> bool {
        !matches!(self, Ability::TakeDamage)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ability::DealToCreature => "deal-to-creature",
            Ability::DealToPlayer => "deal-to-player",
            Ability::TakeDamage => "take-damage",
        };
        f.write_str(name)
    }
}

/// A single damage transformation.
///
/// Modifiers compute a signed delta; the chain clamps the running value
/// at zero after every layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Add a fixed amount (negative values reduce).
    Flat(i64),

    /// Absorb up to `n` damage, announcing the ability to the view.
    Shield(u32),

    /// Collective bonus from every live card of `kind`: added to dealt
    /// damage, subtracted from taken damage.
    PackBonus { kind: CardId },
}

impl Modifier {
    /// Signed change this modifier applies under `ability`.
    #[must_use]
    pub fn delta(&self, ability: Ability, population: &Population) -> i64 {
        match *self {
            Modifier::Flat(delta) => delta,
            Modifier::Shield(amount) => -i64::from(amount),
            Modifier::PackBonus { kind } => {
                let bonus = i64::from(population.bonus(kind));
                if ability.is_dealt() {
                    bonus
                } else {
                    -bonus
                }
            }
        }
    }

    /// Does applying this modifier play an ability animation?
    #[must_use]
    pub const fn signals(&self) -> bool {
        matches!(self, Modifier::Shield(_))
    }

    /// Short human-readable description.
    #[must_use]
    pub fn describe(&self, ability: Ability) -> String {
        match (*self, ability) {
            (Modifier::Shield(n), _) => format!("takes {n} less damage"),
            (Modifier::PackBonus { .. }, Ability::TakeDamage) => "the more of its kind, the tougher".to_string(),
            (Modifier::PackBonus { .. }, _) => "the more of its kind, the stronger".to_string(),
            (Modifier::Flat(d), Ability::TakeDamage) if d < 0 => format!("takes {} less damage", -d),
            (Modifier::Flat(d), Ability::TakeDamage) => format!("takes {d} more damage"),
            (Modifier::Flat(d), _) if d < 0 => format!("deals {} less damage", -d),
            (Modifier::Flat(d), _) => format!("deals {d} more damage"),
        }
    }
}

/// Where a grant came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Defined by the card's own kind.
    Innate,
    /// Taken from another card.
    Stolen { from: EntityId },
}

/// A modifier installed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub modifier: Modifier,
    pub origin: Origin,
}

impl Grant {
    /// A grant defined by the card itself.
    #[must_use]
    pub const fn innate(modifier: Modifier) -> Self {
        Self { modifier, origin: Origin::Innate }
    }

    /// A grant taken from `from`.
    #[must_use]
    pub const fn stolen(modifier: Modifier, from: EntityId) -> Self {
        Self { modifier, origin: Origin::Stolen { from } }
    }

    /// Is this grant the card's own?
    #[must_use]
    pub const fn is_innate(&self) -> bool {
        matches!(self.origin, Origin::Innate)
    }
}

/// Per-ability ordered grant lists.
///
/// Outer layers come first; the implicit identity layer sits after the
/// last grant.
///
/// ```
/// use duck_duel::abilities::{Ability, AbilitySet, Modifier};
///
/// let set = AbilitySet::new().with(Ability::TakeDamage, Modifier::Shield(1));
///
/// assert_eq!(set.grants(Ability::TakeDamage).len(), 1);
/// assert!(set.grants(Ability::DealToCreature).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilitySet {
    slots: [SmallVec<[Grant; 2]>; 3],
}

impl AbilitySet {
    /// An empty set: every ability is the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an innate modifier (builder pattern).
    #[must_use]
    pub fn with(mut self, ability: Ability, modifier: Modifier) -> Self {
        self.push(ability, Grant::innate(modifier));
        self
    }

    /// Append a grant to the end of an ability's chain.
    pub fn push(&mut self, ability: Ability, grant: Grant) {
        self.slots[ability.slot()].push(grant);
    }

    /// Grants for an ability, outermost first.
    #[must_use]
    pub fn grants(&self, ability: Ability) -> &[Grant] {
        &self.slots[ability.slot()]
    }

    /// Does the card define this ability itself?
    #[must_use]
    pub fn has_innate(&self, ability: Ability) -> bool {
        self.grants(ability).iter().any(Grant::is_innate)
    }

    /// Remove and return the innate modifiers of an ability.
    ///
    /// Stolen grants stay where they are.
    pub fn take_innate(&mut self, ability: Ability) -> SmallVec<[Modifier; 2]> {
        let slot = &mut self.slots[ability.slot()];
        let taken = slot.iter().filter(|g| g.is_innate()).map(|g| g.modifier).collect();
        slot.retain(|g| !g.is_innate());
        taken
    }

    /// Total number of grants across all abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(SmallVec::len).sum()
    }

    /// Is every ability the identity?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(SmallVec::is_empty)
    }

    /// Iterate over `(ability, grant)` pairs in slot and chain order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, &Grant)> {
        Ability::ALL
            .into_iter()
            .flat_map(move |ability| self.grants(ability).iter().map(move |g| (ability, g)))
    }
}
