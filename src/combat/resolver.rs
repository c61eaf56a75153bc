//! Attack resolution.
//!
//! An attack walks through these phases:
//!
//! ```text
//! Selecting-Target -> Computing-Dealt-Damage -> Computing-Taken-Damage
//!                  -> Applying -> Checking-Removal -> Done
//! ```
//!
//! Dealt damage is computed once per attack. Everything from taken
//! damage onwards runs once per target, as one [`TaskQueue`] step per
//! target in table order, so target *i + 1* is not touched before target
//! *i* has fully resolved (including its animations and removal).

use crate::abilities::{Ability, ChainScope, ModifierChain};
use crate::cards::{AttackStyle, PreAttack};
use crate::core::{EntityId, GameState, HitRecord, HitTarget};
use crate::stack::TaskQueue;

use super::{lifecycle, pre_attack, targeting};

/// Phase of an attack, for tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackPhase {
    SelectingTarget,
    ComputingDealtDamage,
    ComputingTakenDamage,
    Applying,
    CheckingRemoval,
    Done,
}

/// Outcome of one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    /// The attacking card.
    pub attacker: EntityId,

    /// One record per target, in the order they were hit.
    pub hits: Vec<HitRecord>,
}

impl AttackReport {
    fn empty(attacker: EntityId) -> Self {
        Self { attacker, hits: Vec::new() }
    }

    /// Did the attack hit nothing?
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.hits.is_empty()
    }

    /// Cards that left play because of this attack.
    pub fn removed(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.hits.iter().filter(|h| h.removed).filter_map(HitRecord::creature)
    }
}

/// Resolves attacks and damage chains on a [`GameState`].
pub struct CombatResolver;

impl CombatResolver {
    /// Resolve a full attack by `attacker`.
    ///
    /// An attacker that is not in play, or an attack with no targets, is
    /// a no-op that still completes.
    pub async fn attack(state: &mut GameState, attacker: EntityId) -> AttackReport {
        let log_start = state.log.len();
        let Some((side, _)) = state.locate(attacker) else {
            tracing::debug!(%attacker, "attacker not in play");
            return AttackReport::empty(attacker);
        };
        let Some((style, pre)) = state
            .card(attacker)
            .and_then(|card| state.definition(card.card_id))
            .map(|definition| (definition.attack, definition.pre_attack))
        else {
            return AttackReport::empty(attacker);
        };
        tracing::debug!(%attacker, name = state.card_name(attacker), %side, "attack");

        tracing::trace!(phase = ?AttackPhase::SelectingTarget, %attacker);
        let targets = targeting::select(state, side, style);
        let Some(&first) = targets.first() else {
            tracing::debug!(%attacker, "no targets, attack is a no-op");
            return AttackReport::empty(attacker);
        };

        match pre {
            Some(PreAttack::StealAbilities) => {
                pre_attack::steal_abilities(state, attacker, side).await;
            }
            Some(PreAttack::Brew { max_power_gain, heal }) => {
                pre_attack::brew(state, attacker, side, max_power_gain, heal).await;
            }
            None => {}
        }

        state.view().show_attack(attacker).await;

        tracing::trace!(phase = ?AttackPhase::ComputingDealtDamage, %attacker);
        let base = match style {
            AttackStyle::Sweep { damage } => damage,
            AttackStyle::Front | AttackStyle::Kindred => state.card(attacker).map_or(0, |c| c.power),
        };
        let dealt = Self::modify_damage_dealt_to_creature(state, attacker, base, first).await;

        let mut queue: TaskQueue<GameState> = TaskQueue::new();
        for target in targets {
            queue.push(move |state: &mut GameState| Box::pin(Self::strike(state, attacker, target, dealt)));
        }
        queue
            .run(state, |_| tracing::trace!(phase = ?AttackPhase::Done, %attacker))
            .await;

        AttackReport { attacker, hits: state.hits_since(log_start) }
    }

    /// Hit the opposing player directly with the attacker's power,
    /// through its dealt-to-player chain.
    ///
    /// Returns `None` if the attacker is not in play.
    pub async fn strike_player(state: &mut GameState, attacker: EntityId) -> Option<HitRecord> {
        let (side, _) = state.locate(attacker)?;
        let base = state.card(attacker)?.power;

        state.view().show_attack(attacker).await;
        let dealt = Self::modify_damage_dealt_to_player(state, attacker, base).await;

        let opponent = &mut state.players[side.opponent()];
        opponent.life = opponent.life.saturating_sub(dealt);
        let record = HitRecord {
            turn: state.turn_number,
            attacker,
            target: HitTarget::Player,
            dealt,
            taken: dealt,
            remaining: opponent.life,
            removed: false,
        };
        state.log.push_back(record);
        tracing::debug!(%attacker, dealt, life = record.remaining, "direct strike");

        Some(record)
    }

    /// Run `card`'s dealt-to-creature chain.
    pub async fn modify_damage_dealt_to_creature(
        state: &GameState,
        card: EntityId,
        damage: u32,
        target: EntityId,
    ) -> u32 {
        tracing::trace!(%card, %target, damage, "dealt to creature");
        Self::run_chain(state, card, Ability::DealToCreature, damage).await
    }

    /// Run `card`'s dealt-to-player chain.
    pub async fn modify_damage_dealt_to_player(state: &GameState, card: EntityId, damage: u32) -> u32 {
        tracing::trace!(%card, damage, "dealt to player");
        Self::run_chain(state, card, Ability::DealToPlayer, damage).await
    }

    /// Run `card`'s taken-damage chain for a hit from `source`.
    pub async fn modify_damage_taken(state: &GameState, card: EntityId, damage: u32, source: EntityId) -> u32 {
        tracing::trace!(%card, %source, damage, "taken");
        Self::run_chain(state, card, Ability::TakeDamage, damage).await
    }

    async fn run_chain(state: &GameState, card: EntityId, ability: Ability, damage: u32) -> u32 {
        let Some(instance) = state.card(card) else {
            return damage;
        };
        let view = state.view();
        let scope = ChainScope {
            holder: card,
            population: &state.shared.population,
            view: view.as_ref(),
        };
        ModifierChain::new(instance.abilities.grants(ability))
            .resolve(ability, damage, &scope)
            .await
    }

    /// One target's share of an attack: taken damage, apply, removal.
    async fn strike(state: &mut GameState, attacker: EntityId, target: EntityId, dealt: u32) {
        if state.card(target).is_none() {
            tracing::debug!(%target, "target left play before its hit");
            return;
        }

        tracing::trace!(phase = ?AttackPhase::ComputingTakenDamage, %target);
        let taken = Self::modify_damage_taken(state, target, dealt, attacker).await;

        tracing::trace!(phase = ?AttackPhase::Applying, %target);
        let Some(card) = state.card_mut(target) else {
            return;
        };
        card.take_damage(taken);
        let remaining = card.power;
        let removed = card.is_defeated();

        let view = state.view();
        if taken > 0 {
            view.signal_damage(target, taken).await;
        }

        tracing::trace!(phase = ?AttackPhase::CheckingRemoval, %target);
        if removed {
            lifecycle::on_leave(state, target);
            view.signal_removal(target).await;
        }

        tracing::debug!(%attacker, %target, dealt, taken, remaining, removed, "hit");
        state.log.push_back(HitRecord {
            turn: state.turn_number,
            attacker,
            target: HitTarget::Creature(target),
            dealt,
            taken,
            remaining,
            removed,
        });
    }
}
