//! Cross-card shared ability state: population counters and the theft
//! ledger.
//!
//! Theft is per instance. A thief takes the innate grants of each donor
//! card it is pointed at; other cards of the same kind, including ones
//! that enter play later, keep their own abilities. The ledger records
//! each `(donor, ability)` pair once, so repeating a theft never moves a
//! definition twice.

use rustc_hash::FxHashMap;

use crate::cards::CardInstance;
use crate::core::EntityId;

use super::modifier::{Ability, Grant};
use super::population::Population;

/// Session-wide shared ability state.
#[derive(Clone, Debug, Default)]
pub struct SharedAbilityRegistry {
    /// Live per-kind counters.
    pub population: Population,

    /// `(donor, ability)` → thief.
    thefts: FxHashMap<(EntityId, Ability), EntityId>,
}

impl SharedAbilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Who stole `ability` from `donor`, if anyone.
    #[must_use]
    pub fn thief_of(&self, donor: EntityId, ability: Ability) -> Option<EntityId> {
        self.thefts.get(&(donor, ability)).copied()
    }

    /// Number of recorded `(donor, ability)` thefts.
    #[must_use]
    pub fn theft_count(&self) -> usize {
        self.thefts.len()
    }

    /// Move every innate grant of every donor onto the thief.
    ///
    /// Returns the number of `(donor, ability)` pairs newly stolen.
    /// Donors already recorded are skipped, and a donor never steals
    /// from itself.
    pub fn steal<'d>(
        &mut self,
        thief: &mut CardInstance,
        donors: impl IntoIterator<Item = &'d mut CardInstance>,
    ) -> usize {
        let mut stolen = 0;

        for donor in donors {
            if donor.entity_id == thief.entity_id {
                continue;
            }

            for ability in Ability::ALL {
                let key = (donor.entity_id, ability);
                if self.thefts.contains_key(&key) || !donor.abilities.has_innate(ability) {
                    continue;
                }

                self.thefts.insert(key, thief.entity_id);
                for modifier in donor.abilities.take_innate(ability) {
                    thief.abilities.push(ability, Grant::stolen(modifier, donor.entity_id));
                }
                stolen += 1;

                tracing::debug!(
                    thief = %thief.entity_id,
                    donor = %donor.entity_id,
                    %ability,
                    "ability stolen"
                );
            }
        }

        stolen
    }
}
