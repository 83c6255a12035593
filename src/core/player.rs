//! Player identification, per-player storage, and player records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Players take turns in ascending id order,
//! wrapping back to `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A seated player: display name plus the ring positions of the houses
//! and store the player owns.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::pit::PitId;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after this one in a game of `player_count` players.
    ///
    /// ```
    /// use kalaha::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use kalaha::core::{PlayerId, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// stores[PlayerId::new(1)] += 4;
/// assert_eq!(stores[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

/// A seated player.
///
/// Players own a contiguous run of houses followed by their store. The
/// record only holds ring positions; seed counts live on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    first_house: PitId,
    house_count: usize,
    next: PlayerId,
}

impl Player {
    pub(crate) fn new(
        id: PlayerId,
        name: impl Into<String>,
        first_house: PitId,
        house_count: usize,
        player_count: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            first_house,
            house_count,
            next: id.next(player_count),
        }
    }

    /// Player id (turn order position).
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// 0-based player index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player who moves next in rotation.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next
    }

    /// Number of houses this player owns.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.house_count
    }

    /// Ring position of the player's first house.
    #[must_use]
    pub fn first_house(&self) -> PitId {
        self.first_house
    }

    /// Ring position of the player's `house`-th house, if in range.
    #[must_use]
    pub fn house(&self, house: usize) -> Option<PitId> {
        (house < self.house_count).then(|| PitId::new(self.first_house.index() + house))
    }

    /// Ring positions of all houses, in sowing order.
    pub fn houses(&self) -> impl Iterator<Item = PitId> {
        self.house_range().map(PitId::new)
    }

    /// Ring position of the player's store (directly after the last house).
    #[must_use]
    pub fn store(&self) -> PitId {
        PitId::new(self.first_house.index() + self.house_count)
    }

    /// Check whether a ring position is one of this player's houses.
    #[must_use]
    pub fn owns_house(&self, pit: PitId) -> bool {
        self.house_range().contains(&pit.index())
    }

    /// Map a ring position back to this player's house index.
    #[must_use]
    pub fn house_index(&self, pit: PitId) -> Option<usize> {
        self.owns_house(pit)
            .then(|| pit.index() - self.first_house.index())
    }

    pub(crate) fn house_range(&self) -> Range<usize> {
        let start = self.first_house.index();
        start..start + self.house_count
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
