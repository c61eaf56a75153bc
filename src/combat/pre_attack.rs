//! Actions some cards take right before attacking.

use std::rc::Rc;

use crate::core::{EntityId, GameState, PlayerId};
use crate::stack::TaskQueue;

/// Steal the innate abilities of every opposing card that shares the
/// front opposing card's kind.
///
/// Returns the number of `(donor, ability)` pairs newly stolen. The view
/// is signalled once, and only if something was stolen.
pub async fn steal_abilities(state: &mut GameState, thief: EntityId, side: PlayerId) -> usize {
    let Some(kind) = state.players[side.opponent()].table.front().map(|c| c.card_id) else {
        return 0;
    };

    let GameState { players, shared, .. } = &mut *state;
    let (mine, theirs) = players.split_mut(side);
    let Some(thief_card) = mine.table.get_mut(thief) else {
        return 0;
    };
    let stolen = shared.steal(thief_card, theirs.table.iter_mut().filter(|c| c.card_id == kind));

    if stolen > 0 {
        tracing::debug!(%thief, %kind, stolen, "abilities stolen");
        state.view().signal_ability(thief).await;
    }
    stolen
}

/// Every duck on both tables (the brewer's side first) gains max power
/// and heals. Heal animations play one duck at a time.
pub async fn brew(state: &mut GameState, brewer: EntityId, side: PlayerId, max_power_gain: u32, heal: u32) {
    let mut healed = Vec::new();
    for player in [side, side.opponent()] {
        for card in state.players[player].table.iter_mut().filter(|c| c.capabilities.is_duck()) {
            card.raise_max_power(max_power_gain);
            healed.push((card.entity_id, card.heal(heal)));
        }
    }
    tracing::debug!(%brewer, ducks = healed.len(), "brew");

    let view = state.view();
    view.signal_ability(brewer).await;

    let mut queue: TaskQueue<GameState> = TaskQueue::new();
    for (duck, gained) in healed {
        let view = Rc::clone(&view);
        queue.push(move |_: &mut GameState| {
            Box::pin(async move {
                view.signal_heal(duck, gained).await;
            })
        });
    }
    queue.run(state, |_| {}).await;
}
