//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two sides of a match. Seat 0 is the
//! participant passed first when the match is created.
//!
//! ## PlayerMap
//!
//! Fixed per-seat storage backed by a two-element array.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier in a two-player match.
///
/// Only `PlayerId(0)` and `PlayerId(1)` exist. Use the constants rather
/// than constructing ids by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The seat of the first participant (deals first in hand one).
    pub const FIRST: PlayerId = PlayerId(0);
    /// The seat of the second participant.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a seat id from a raw index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            0 | 1 => Some(Self(id)),
            _ => None,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in index order.
    ///
    /// ```
    /// use truco_core::core::PlayerId;
    ///
    /// let seats = PlayerId::both();
    /// assert_eq!(seats, [PlayerId::FIRST, PlayerId::SECOND]);
    /// assert_eq!(seats[0].opponent(), seats[1]);
    /// ```
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [Self::FIRST, Self::SECOND]
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("no seat {value} in a two-player match"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use truco_core::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerId::SECOND] = 3;
///
/// assert_eq!(score[PlayerId::FIRST], 0);
/// assert_eq!(score[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create from explicit first and second seat values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().into_iter().zip(self.data.iter_mut())
    }

    /// Map every entry into a new PlayerMap.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
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
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 0");
    }

    #[test]
    fn test_player_id_new_rejects_third_seat() {
        assert_eq!(PlayerId::new(0), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::new(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::new(2), None);
    }

    #[test]
    fn test_opponent_is_involution() {
        for seat in PlayerId::both() {
            assert_ne!(seat, seat.opponent());
            assert_eq!(seat.opponent().opponent(), seat);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(0);

        map[PlayerId::FIRST] = 10;
        map[PlayerId::SECOND] += 2;

        assert_eq!(map[PlayerId::FIRST], 10);
        assert_eq!(map[PlayerId::SECOND], 2);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair("a", "b");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &"a"), (PlayerId::SECOND, &"b")]);
    }

    #[test]
    fn test_player_id_serde_rejects_unknown_seat() {
        assert_eq!(serde_json::to_string(&PlayerId::SECOND).unwrap(), "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(11u32, 5u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
