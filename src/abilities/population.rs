//! Live per-kind population counters.
//!
//! Counted kinds bump their counter when a card enters play and drop it
//! when the card leaves. The counter feeds the collective bonus
//! `n * (n + 1) / 2`. Counters belong to the session, never to a global.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Triangular number `n * (n + 1) / 2`.
///
/// ```
/// use duck_duel::abilities::triangular;
///
/// assert_eq!(triangular(0), 0);
/// assert_eq!(triangular(1), 1);
/// assert_eq!(triangular(2), 3);
/// assert_eq!(triangular(4), 10);
/// ```
#[must_use]
pub const fn triangular(n: u32) -> u32 {
    n.saturating_mul(n.saturating_add(1)) / 2
}

/// Live count of in-play cards per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    counts: FxHashMap<CardId, u32>,
}

impl Population {
    /// Create an empty set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A card of `kind` entered play. Returns the new count.
    pub fn enter(&mut self, kind: CardId) -> u32 {
        let count = self.counts.entry(kind).or_insert(0);
        *count += 1;
        *count
    }

    /// A card of `kind` left play. Returns the new count.
    ///
    /// Never goes below zero; an unmatched leave is logged and ignored.
    pub fn leave(&mut self, kind: CardId) -> u32 {
        let count = self.counts.entry(kind).or_insert(0);
        if *count == 0 {
            tracing::warn!(%kind, "population leave without matching enter, clamped at 0");
            return 0;
        }
        *count -= 1;
        *count
    }

    /// Current count for `kind`.
    #[must_use]
    pub fn count(&self, kind: CardId) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Collective bonus for `kind`.
    #[must_use]
    pub fn bonus(&self, kind: CardId) -> u32 {
        triangular(self.count(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAD: CardId = CardId::new(5);

    #[test]
    fn test_enter_leave() {
        let mut population = Population::new();
        assert_eq!(population.count(LAD), 0);

        assert_eq!(population.enter(LAD), 1);
        assert_eq!(population.enter(LAD), 2);
        assert_eq!(population.bonus(LAD), 3);

        assert_eq!(population.leave(LAD), 1);
        assert_eq!(population.bonus(LAD), 1);
    }

    #[test]
    fn test_leave_clamps_at_zero() {
        let mut population = Population::new();
        assert_eq!(population.leave(LAD), 0);
        assert_eq!(population.count(LAD), 0);

        population.enter(LAD);
        assert_eq!(population.count(LAD), 1);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut population = Population::new();
        population.enter(LAD);
        population.enter(CardId::new(6));

        assert_eq!(population.count(LAD), 1);
        assert_eq!(population.count(CardId::new(6)), 1);
        assert_eq!(population.count(CardId::new(7)), 0);
    }
}
