//! Property tests for chains, counters, damage and scheduling.

use std::rc::Rc;

use proptest::prelude::*;

use duck_duel::abilities::{
    clamp_damage, triangular, Ability, ChainScope, Grant, Modifier, ModifierChain, Population,
};
use duck_duel::cards::catalog::{DOG, LAD};
use duck_duel::cards::{CardId, CardInstance, CardRegistry};
use duck_duel::combat::lifecycle;
use duck_duel::core::{EntityId, GameConfig, GameState, PlayerId};
use duck_duel::stack::TaskQueue;
use duck_duel::view::NullView;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn resolve(grants: &[Grant], ability: Ability, damage: u32, population: &Population) -> u32 {
    let scope = ChainScope {
        holder: EntityId(0),
        population,
        view: &NullView,
    };
    block_on(ModifierChain::new(grants).resolve(ability, damage, &scope))
}

fn ability() -> impl Strategy<Value = Ability> {
    prop_oneof![
        Just(Ability::DealToCreature),
        Just(Ability::DealToPlayer),
        Just(Ability::TakeDamage),
    ]
}

fn modifier() -> impl Strategy<Value = Modifier> {
    prop_oneof![
        (-20_i64..20).prop_map(Modifier::Flat),
        (0_u32..6).prop_map(Modifier::Shield),
        Just(Modifier::PackBonus { kind: LAD }),
    ]
}

proptest! {
    /// A chain with no grants returns its input.
    #[test]
    fn prop_empty_chain_is_identity(damage in any::<u32>(), ability in ability()) {
        prop_assert_eq!(resolve(&[], ability, damage, &Population::new()), damage);
    }

    /// A chain folds each layer with clamping and stops once the value is zero.
    #[test]
    fn prop_chain_matches_clamped_fold(
        damage in 0_u32..50,
        ability in ability(),
        modifiers in prop::collection::vec(modifier(), 0..6),
        lads in 0_u32..5,
    ) {
        let mut population = Population::new();
        for _ in 0..lads {
            population.enter(LAD);
        }
        let grants: Vec<Grant> = modifiers.iter().copied().map(Grant::innate).collect();

        let mut expected = damage;
        for modifier in &modifiers {
            if expected == 0 {
                break;
            }
            expected = clamp_damage(i64::from(expected) + modifier.delta(ability, &population));
        }

        prop_assert_eq!(resolve(&grants, ability, damage, &population), expected);
    }

    /// The counter equals entries minus removals, never dropping below zero.
    #[test]
    fn prop_population_tracks_events(events in prop::collection::vec(any::<bool>(), 0..40)) {
        let kind = CardId::new(7);
        let mut population = Population::new();
        let mut model: u32 = 0;

        for entered in events {
            if entered {
                population.enter(kind);
                model += 1;
            } else {
                population.leave(kind);
                model = model.saturating_sub(1);
            }
            prop_assert_eq!(population.count(kind), model);
            prop_assert_eq!(population.bonus(kind), model * (model + 1) / 2);
        }
    }

    /// Lifecycle hooks keep the lad counter equal to the lads on the table.
    #[test]
    fn prop_hooks_match_table(deploys in 1_usize..6, removals in prop::collection::vec(any::<prop::sample::Index>(), 0..8)) {
        let mut state = GameState::new(GameConfig::default(), CardRegistry::standard(), Rc::new(NullView));
        for _ in 0..deploys {
            state.deploy(PlayerId::BANDIT, LAD).unwrap();
        }
        state.deploy(PlayerId::BANDIT, DOG).unwrap();

        for index in removals {
            let table = &state.players[PlayerId::BANDIT].table;
            if table.is_empty() {
                break;
            }
            let entity = table.at(index.index(table.len())).unwrap().entity_id;
            lifecycle::on_leave(&mut state, entity);

            let on_table = state.players[PlayerId::BANDIT].table.iter().filter(|c| c.card_id == LAD).count();
            prop_assert_eq!(state.shared.population.count(LAD) as usize, on_table);
        }
    }

    /// Power never underflows, whatever the hits.
    #[test]
    fn prop_power_floors_at_zero(power in 0_u32..20, hits in prop::collection::vec(any::<u32>(), 0..8)) {
        let mut card = CardInstance::blank(EntityId(1), CardId::new(1), PlayerId::SHERIFF, power);
        let mut total: u64 = 0;

        for hit in hits {
            card.take_damage(hit);
            total += u64::from(hit);
            let expected = u64::from(power).saturating_sub(total);
            prop_assert_eq!(u64::from(card.power), expected);
        }
    }

    /// Steps run in push order and the completion runs once, last.
    #[test]
    fn prop_queue_preserves_order(yields in prop::collection::vec(0_u8..4, 0..12)) {
        let mut queue: TaskQueue<Vec<usize>> = TaskQueue::new();
        for (index, count) in yields.iter().copied().enumerate() {
            queue.push(move |log: &mut Vec<usize>| {
                Box::pin(async move {
                    for _ in 0..count {
                        tokio::task::yield_now().await;
                    }
                    log.push(index);
                })
            });
        }

        let mut log = Vec::new();
        let mut done = Vec::new();
        block_on(queue.run(&mut log, |log| done.push(log.len())));

        prop_assert_eq!(log, (0..yields.len()).collect::<Vec<_>>());
        prop_assert_eq!(done, vec![yields.len()]);
    }

    #[test]
    fn prop_triangular(n in 0_u32..10_000) {
        prop_assert_eq!(triangular(n), n * (n + 1) / 2);
    }
}
