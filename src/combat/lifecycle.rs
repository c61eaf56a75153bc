//! Lifecycle hooks fired when cards enter and leave play.
//!
//! Both hooks run the base behaviour first (logging, table bookkeeping)
//! and only then touch population counters. Everything happens
//! synchronously, so no in-flight chain can observe a half-updated
//! counter.

use crate::cards::CardInstance;
use crate::core::{EntityId, GameState};

/// A card has just been placed on its table.
pub fn on_enter(state: &mut GameState, entity: EntityId) {
    let Some(card) = state.card(entity) else {
        return;
    };
    let kind = card.card_id;
    let owner = card.owner;
    tracing::debug!(%entity, name = state.card_name(entity), %owner, "card enters play");

    if state.definition(kind).is_some_and(|d| d.counted) {
        let count = state.shared.population.enter(kind);
        tracing::trace!(%kind, count, "population up");
    }
}

/// A card leaves play: take it off its table, then update counters.
///
/// Returns the removed card, or `None` if it was not in play.
pub fn on_leave(state: &mut GameState, entity: EntityId) -> Option<CardInstance> {
    let (owner, _) = state.locate(entity)?;
    let name = state.card_name(entity).to_string();
    let card = state.players[owner].table.remove(entity)?;
    tracing::debug!(%entity, %name, %owner, "card leaves play");

    if state.definition(card.card_id).is_some_and(|d| d.counted) {
        let count = state.shared.population.leave(card.card_id);
        tracing::trace!(kind = %card.card_id, count, "population down");
    }

    Some(card)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::cards::catalog::{DUCK, LAD};
    use crate::cards::CardRegistry;
    use crate::core::{GameConfig, PlayerId};
    use crate::view::NullView;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), CardRegistry::standard(), Rc::new(NullView))
    }

    #[test]
    fn test_counted_kind_tracks_population() {
        let mut state = state();
        let first = state.deploy(PlayerId::BANDIT, LAD).unwrap();
        state.deploy(PlayerId::BANDIT, LAD).unwrap();
        assert_eq!(state.shared.population.count(LAD), 2);

        let removed = on_leave(&mut state, first);

        assert_eq!(removed.map(|c| c.entity_id), Some(first));
        assert_eq!(state.shared.population.count(LAD), 1);
        assert_eq!(state.players[PlayerId::BANDIT].table.len(), 1);
    }

    #[test]
    fn test_uncounted_kind_leaves_population_alone() {
        let mut state = state();
        let duck = state.deploy(PlayerId::SHERIFF, DUCK).unwrap();
        on_leave(&mut state, duck);

        assert_eq!(state.shared.population.count(DUCK), 0);
        assert!(state.players[PlayerId::SHERIFF].table.is_empty());
    }

    #[test]
    fn test_leave_twice_is_harmless() {
        let mut state = state();
        let lad = state.deploy(PlayerId::BANDIT, LAD).unwrap();

        assert!(on_leave(&mut state, lad).is_some());
        assert!(on_leave(&mut state, lad).is_none());
        assert_eq!(state.shared.population.count(LAD), 0);
    }
}
