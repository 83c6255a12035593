//! Board configuration.
//!
//! A `GameConfig` fixes the shape of the board for the lifetime of a game:
//! how many players sit at it, how many houses each owns, and how many seeds
//! every house starts with. The default is the classic two-player board with
//! six houses of six seeds.

use serde::{Deserialize, Serialize};

/// Classic number of players.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Classic number of houses per player.
pub const DEFAULT_HOUSES_PER_PLAYER: usize = 6;

/// Classic number of seeds in each house at the start.
pub const DEFAULT_INITIAL_SEEDS: u32 = 6;

/// Largest supported table.
pub const MAX_PLAYER_COUNT: usize = 8;

/// Longest ring addressable by `PitId`.
pub const MAX_PIT_COUNT: usize = u16::MAX as usize + 1;

/// Shape of the board.
///
/// ## Example
///
/// ```
/// use kalaha::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.pit_count(), 14);
/// assert_eq!(config.total_seeds(), 72);
///
/// let small = GameConfig::default().with_houses_per_player(4).with_initial_seeds(3);
/// assert_eq!(small.total_seeds(), 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players. Always even so that every house has a facing house.
    pub player_count: usize,

    /// Houses owned by each player.
    pub houses_per_player: usize,

    /// Seeds placed in every house when a fresh game starts.
    pub initial_seeds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            houses_per_player: DEFAULT_HOUSES_PER_PLAYER,
            initial_seeds: DEFAULT_INITIAL_SEEDS,
        }
    }
}

impl GameConfig {
    /// Set the number of players.
    ///
    /// # Panics
    ///
    /// Panics unless `count` is even and within `2..=MAX_PLAYER_COUNT`, or if
    /// the resulting board is too large (see [`GameConfig::assert_valid`]).
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self.assert_valid();
        self
    }

    /// Set the number of houses per player.
    ///
    /// # Panics
    ///
    /// Panics if `houses` is zero or the ring would outgrow `MAX_PIT_COUNT`.
    #[must_use]
    pub fn with_houses_per_player(mut self, houses: usize) -> Self {
        self.houses_per_player = houses;
        self.assert_valid();
        self
    }

    /// Set the number of seeds each house starts with.
    ///
    /// # Panics
    ///
    /// Panics if the seeds on a fresh board would not fit in a `u32`.
    #[must_use]
    pub fn with_initial_seeds(mut self, seeds: u32) -> Self {
        self.initial_seeds = seeds;
        self.assert_valid();
        self
    }

    /// Check that this configuration describes a playable board.
    ///
    /// The fields are public, so a config built as a struct literal or
    /// deserialized from elsewhere is checked here before a board is laid out.
    ///
    /// # Panics
    ///
    /// - player count outside `2..=MAX_PLAYER_COUNT`, or odd
    /// - zero houses per player
    /// - more than `MAX_PIT_COUNT` pits
    /// - more than `u32::MAX` seeds on a fresh board
    pub fn assert_valid(&self) {
        assert!(
            (2..=MAX_PLAYER_COUNT).contains(&self.player_count),
            "Player count must be 2-{MAX_PLAYER_COUNT}"
        );
        assert!(self.player_count % 2 == 0, "Player count must be even");
        assert!(self.houses_per_player > 0, "Each player needs at least one house");
        assert!(
            self.houses_per_player
                .checked_add(1)
                .and_then(|per_player| per_player.checked_mul(self.player_count))
                .is_some_and(|pits| pits <= MAX_PIT_COUNT),
            "Board cannot hold more than {MAX_PIT_COUNT} pits"
        );
        assert!(
            self.total_seeds() <= u64::from(u32::MAX),
            "Board cannot hold more than {} seeds",
            u32::MAX
        );
    }

    /// Pits owned by one player (houses plus the store).
    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.houses_per_player + 1
    }

    /// Length of the ring.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.player_count * self.pits_per_player()
    }

    /// Seeds on a fresh board. Conserved by every move.
    #[must_use]
    pub fn total_seeds(&self) -> u64 {
        (self.player_count * self.houses_per_player) as u64 * u64::from(self.initial_seeds)
    }

    /// Number of `|`-separated tokens in a serialized board state.
    #[must_use]
    pub fn board_state_len(&self) -> usize {
        self.pit_count() + 1
    }
}
