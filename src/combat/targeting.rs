//! Target selection.
//!
//! Targets are always opposing cards, returned in table order.

use smallvec::SmallVec;

use crate::cards::AttackStyle;
use crate::core::{EntityId, GameState, PlayerId};

/// Selected targets, front to back.
pub type Targets = SmallVec<[EntityId; 4]>;

/// Pick the targets of an attack by a card on `side`.
///
/// Empty when the opposing table is empty.
#[must_use]
pub fn select(state: &GameState, side: PlayerId, style: AttackStyle) -> Targets {
    let table = &state.players[side.opponent()].table;

    match style {
        AttackStyle::Front => table.front().map(|c| c.entity_id).into_iter().collect(),
        AttackStyle::Sweep { .. } => table.entities().collect(),
        AttackStyle::Kindred => {
            let Some(front) = table.front() else {
                return Targets::new();
            };
            let class = front.capabilities.classify();
            table
                .iter()
                .filter(|c| c.capabilities.classify() == class)
                .map(|c| c.entity_id)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::cards::catalog::{DOG, DUCK, PSEUDO_DUCK};
    use crate::cards::CardRegistry;
    use crate::core::GameConfig;
    use crate::view::NullView;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), CardRegistry::standard(), Rc::new(NullView))
    }

    #[test]
    fn test_front() {
        let mut state = state();
        let first = state.deploy(PlayerId::BANDIT, DOG).unwrap();
        state.deploy(PlayerId::BANDIT, DOG).unwrap();

        let targets = select(&state, PlayerId::SHERIFF, AttackStyle::Front);
        assert_eq!(targets.as_slice(), &[first]);
    }

    #[test]
    fn test_sweep_hits_all_in_order() {
        let mut state = state();
        let ids: Vec<_> = (0..3).map(|_| state.deploy(PlayerId::SHERIFF, DUCK).unwrap()).collect();

        let targets = select(&state, PlayerId::BANDIT, AttackStyle::Sweep { damage: 2 });
        assert_eq!(targets.as_slice(), ids.as_slice());
    }

    #[test]
    fn test_kindred_matches_front_classification() {
        let mut state = state();
        let duck_a = state.deploy(PlayerId::SHERIFF, DUCK).unwrap();
        state.deploy(PlayerId::SHERIFF, PSEUDO_DUCK).unwrap();
        state.deploy(PlayerId::SHERIFF, DOG).unwrap();
        let duck_b = state.deploy(PlayerId::SHERIFF, DUCK).unwrap();

        let targets = select(&state, PlayerId::BANDIT, AttackStyle::Kindred);
        assert_eq!(targets.as_slice(), &[duck_a, duck_b]);
    }

    #[test]
    fn test_empty_table_has_no_targets() {
        let state = state();
        for style in [AttackStyle::Front, AttackStyle::Sweep { damage: 2 }, AttackStyle::Kindred] {
            assert!(select(&state, PlayerId::SHERIFF, style).is_empty());
        }
    }
}
