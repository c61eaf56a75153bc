//! Combat log records.
//!
//! Every resolved hit is appended to the session's combat log, giving
//! tests and front-ends an ordered account of what happened.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// What an attack struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitTarget {
    /// A card in play.
    Creature(EntityId),
    /// The opposing player directly.
    Player,
}

/// One resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitRecord {
    /// Turn on which the hit landed (starts at 1).
    pub turn: u32,

    /// The attacking card.
    pub attacker: EntityId,

    /// What was hit.
    pub target: HitTarget,

    /// Damage after the attacker's dealt chain.
    pub dealt: u32,

    /// Damage after the target's taken chain (what was applied).
    pub taken: u32,

    /// Power or life left after the hit.
    pub remaining: u32,

    /// Did the target leave play?
    pub removed: bool,
}

impl HitRecord {
    /// The struck creature, if the target was one.
    #[must_use]
    pub const fn creature(&self) -> Option<EntityId> {
        match self.target {
            HitTarget::Creature(entity) => Some(entity),
            HitTarget::Player => None,
        }
    }
}
