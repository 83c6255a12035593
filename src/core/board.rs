//! The board ring.
//!
//! All pits live in one flat `Vec` in ring order: player 0's houses, player
//! 0's store, player 1's houses, player 1's store, and so on. Ring topology is
//! pure index arithmetic:
//!
//! - `next(i) = (i + 1) % len`
//! - `opposite` is a lookup table computed once at construction
//!
//! The structure never changes after construction; only seed counts do.

use serde::Serialize;

use super::config::GameConfig;
use super::pit::{Pit, PitId, PitKind};
use super::player::PlayerId;

/// Fixed circular arrangement of every pit in the game.
///
/// Serialize-only: the opposite table is derived from the config, and boards
/// are restored through the board-state string instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    config: GameConfig,
    pits: Vec<Pit>,
    /// Facing house for every house; `None` for stores.
    opposite: Vec<Option<PitId>>,
}

impl Board {
    /// Build a fresh board: every house holds `initial_seeds`, stores are empty.
    ///
    /// # Panics
    ///
    /// Panics if `config` is not a playable shape (see
    /// [`GameConfig::assert_valid`]).
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        config.assert_valid();
        let houses = config.houses_per_player;
        let mut pits = Vec::with_capacity(config.pit_count());

        for player in PlayerId::all(config.player_count) {
            for _ in 0..houses {
                let id = PitId::new(pits.len());
                pits.push(Pit::house(id, player, config.initial_seeds));
            }
            let id = PitId::new(pits.len());
            pits.push(Pit::store(id, player));
        }

        let opposite = pits
            .iter()
            .map(|pit| pit.is_house().then(|| Self::facing_house(&config, pit.id())))
            .collect();

        Self {
            config,
            pits,
            opposite,
        }
    }

    /// House `j` of player `p` faces house `H-1-j` of player `p + N/2`.
    fn facing_house(config: &GameConfig, house: PitId) -> PitId {
        let per_player = config.pits_per_player();
        let player = house.index() / per_player;
        let offset = house.index() % per_player;
        let across = (player + config.player_count / 2) % config.player_count;

        PitId::new(across * per_player + (config.houses_per_player - 1 - offset))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of pits on the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pits.is_empty()
    }

    /// All pits in ring order.
    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    #[must_use]
    pub fn pit(&self, id: PitId) -> &Pit {
        &self.pits[id.index()]
    }

    #[must_use]
    pub fn seeds(&self, id: PitId) -> u32 {
        self.pit(id).seeds()
    }

    #[must_use]
    pub fn owner(&self, id: PitId) -> PlayerId {
        self.pit(id).owner()
    }

    #[must_use]
    pub fn kind(&self, id: PitId) -> PitKind {
        self.pit(id).kind()
    }

    /// The pit following `id` in sowing order.
    #[must_use]
    pub fn next(&self, id: PitId) -> PitId {
        PitId::new((id.index() + 1) % self.pits.len())
    }

    /// The house facing `id`, or `None` if `id` is a store.
    #[must_use]
    pub fn opposite(&self, id: PitId) -> Option<PitId> {
        self.opposite[id.index()]
    }

    /// Ring position of a player's `house`-th house, if in range.
    #[must_use]
    pub fn house(&self, player: PlayerId, house: usize) -> Option<PitId> {
        (house < self.config.houses_per_player)
            .then(|| PitId::new(player.index() * self.config.pits_per_player() + house))
    }

    /// Ring position of a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> PitId {
        PitId::new(player.index() * self.config.pits_per_player() + self.config.houses_per_player)
    }

    /// A player's houses in sowing order.
    #[must_use]
    pub fn houses(&self, player: PlayerId) -> &[Pit] {
        let start = player.index() * self.config.pits_per_player();
        &self.pits[start..start + self.config.houses_per_player]
    }

    /// Seeds in a player's `house`-th house, if in range.
    #[must_use]
    pub fn house_seeds(&self, player: PlayerId, house: usize) -> Option<u32> {
        self.house(player, house).map(|id| self.seeds(id))
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store_seeds(&self, player: PlayerId) -> u32 {
        self.seeds(self.store(player))
    }

    /// True when none of the player's houses hold seeds.
    #[must_use]
    pub fn all_houses_empty(&self, player: PlayerId) -> bool {
        self.houses(player).iter().all(Pit::is_empty)
    }

    /// Seeds across every pit.
    #[must_use]
    pub fn total_seeds(&self) -> u64 {
        self.pits.iter().map(|pit| u64::from(pit.seeds())).sum()
    }

    /// One full circuit of the ring starting at `start`.
    pub fn ring_from(&self, start: PitId) -> impl Iterator<Item = &Pit> {
        let len = self.pits.len();
        (0..len).map(move |step| &self.pits[(start.index() + step) % len])
    }

    pub(crate) fn add_seeds(&mut self, id: PitId, seeds: u32) {
        self.pits[id.index()].add_seeds(seeds);
    }

    pub(crate) fn set_seeds(&mut self, id: PitId, seeds: u32) {
        self.pits[id.index()].set_seeds(seeds);
    }

    pub(crate) fn take_seeds(&mut self, id: PitId) -> u32 {
        self.pits[id.index()].take_seeds()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, chunk) in self.pits.chunks(self.config.pits_per_player()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", PlayerId::new(i as u8))?;
            for pit in chunk {
                write!(f, " {pit}")?;
            }
        }
        Ok(())
    }
}
