//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game is always played between two sides: the sheriff (player 0)
//! and the bandit (player 1). `PlayerId::opponent` gives the opposing
//! side, which is how attacks find their targets.
//!
//! ## PlayerMap
//!
//! Per-side data storage backed by a fixed pair for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Side identifier. `0` is the sheriff, `1` the bandit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The sheriff side (moves first by default).
    pub const SHERIFF: Self = Self(0);

    /// The bandit side.
    pub const BANDIT: Self = Self(1);

    /// Get the raw side index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing side.
    ///
    /// ```
    /// use duck_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::SHERIFF.opponent(), PlayerId::BANDIT);
    /// assert_eq!(PlayerId::BANDIT.opponent(), PlayerId::SHERIFF);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both sides, sheriff first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::SHERIFF, Self::BANDIT].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::SHERIFF => write!(f, "Sheriff"),
            _ => write!(f, "Bandit"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use duck_duel::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<u32> = PlayerMap::new(|_| 10);
/// life[PlayerId::BANDIT] = 7;
///
/// assert_eq!(life[PlayerId::SHERIFF], 10);
/// assert_eq!(life[PlayerId::BANDIT], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::SHERIFF), factory(PlayerId::BANDIT)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable references to both sides at once, ordered `(player, opponent)`.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [sheriff, bandit] = &mut self.data;
        if player == PlayerId::SHERIFF {
            (sheriff, bandit)
        } else {
            (bandit, sheriff)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::SHERIFF.index(), 0);
        assert_eq!(PlayerId::BANDIT.index(), 1);
        assert_eq!(format!("{}", PlayerId::SHERIFF), "Sheriff");
        assert_eq!(format!("{}", PlayerId::BANDIT), "Bandit");
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::both() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::SHERIFF], 0);
        assert_eq!(map[PlayerId::BANDIT], 10);
    }

    #[test]
    fn test_split_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        let (mine, theirs) = map.split_mut(PlayerId::BANDIT);
        *mine = 1;
        *theirs = 2;

        assert_eq!(map[PlayerId::BANDIT], 1);
        assert_eq!(map[PlayerId::SHERIFF], 2);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::SHERIFF, &0), (PlayerId::BANDIT, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
