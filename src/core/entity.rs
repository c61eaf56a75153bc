//! Entity identification for cards in play.
//!
//! Every card instance placed on a table gets a unique `EntityId`,
//! allocated by the session in deploy order. Two cards of the same
//! kind (same [`CardId`](crate::cards::CardId)) always have distinct
//! entity IDs.
//!
//! ```
//! use duck_duel::core::EntityId;
//!
//! let first = EntityId(0);
//! assert_eq!(first.next(), EntityId(1));
//! assert_eq!(format!("{}", first), "Entity(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(EntityId(0).next(), EntityId(1));
        assert_eq!(EntityId(41).next().0, 42);
    }

    #[test]
    fn test_ordering() {
        assert!(EntityId(1) < EntityId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
