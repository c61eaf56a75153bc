//! Damage modifier chain.
//!
//! A chain folds a damage value through a card's grants for one ability,
//! outermost first, ending in the identity. Each layer:
//!
//! 1. computes its delta from the current value,
//! 2. clamps the result at zero,
//! 3. optionally waits for the view to play the ability,
//! 4. hands the value to the next layer.
//!
//! Once the running value hits zero no further layer runs. Every layer
//! completes exactly once because layers are awaited one at a time in a
//! single loop.

use crate::core::EntityId;
use crate::view::View;

use super::modifier::{Ability, Grant};
use super::population::Population;

/// What a chain needs from the outside world while it runs.
pub struct ChainScope<'a> {
    /// The card whose chain is running (receives ability signals).
    pub holder: EntityId,
    /// Live population counters for collective bonuses.
    pub population: &'a Population,
    /// View to await for ability animations.
    pub view: &'a dyn View,
}

/// A borrowed, ordered list of grants for one ability.
#[derive(Clone, Copy, Debug)]
pub struct ModifierChain<'c> {
    grants: &'c [Grant],
}

impl<'c> ModifierChain<'c> {
    /// Chain over the given grants, outermost first.
    #[must_use]
    pub const fn new(grants: &'c [Grant]) -> Self {
        Self { grants }
    }

    /// Fold `damage` through the chain.
    pub async fn resolve(&self, ability: Ability, damage: u32, scope: &ChainScope<'_>) -> u32 {
        let mut value = damage;

        for (layer, grant) in self.grants.iter().enumerate() {
            if value == 0 {
                tracing::trace!(holder = %scope.holder, %ability, layer, "chain short-circuits at zero");
                break;
            }

            let next = clamp_damage(i64::from(value) + grant.modifier.delta(ability, scope.population));
            if grant.modifier.signals() {
                scope.view.signal_ability(scope.holder).await;
            }

            tracing::trace!(
                holder = %scope.holder,
                %ability,
                layer,
                from = value,
                to = next,
                "chain layer"
            );
            value = next;
        }

        value
    }
}

/// Clamp a signed damage value into `0..=u32::MAX`.
#[must_use]
pub fn clamp_damage(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
