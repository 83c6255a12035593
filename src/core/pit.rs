//! Pits: the seed-holding slots of the board.
//!
//! Every pit is either a house (sown from and into) or a store (collects
//! captured and swept seeds). Pits are addressed by their position on the
//! ring, `PitId`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Position of a pit on the ring (0-based, immutable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PitId(pub u16);

impl PitId {
    /// Create a pit ID from a ring position.
    ///
    /// Rings are capped at `MAX_PIT_COUNT` pits, so every position fits.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        debug_assert!(index <= u16::MAX as usize);
        Self(index as u16)
    }

    /// Ring position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pit({})", self.0)
    }
}

/// What a pit is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitKind {
    /// Player-owned pit that can be sown from and into.
    House,
    /// Player-owned terminal pit. Opponents skip it while sowing.
    Store,
}

/// A single pit record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pit {
    id: PitId,
    owner: PlayerId,
    kind: PitKind,
    seeds: u32,
}

impl Pit {
    /// Create a house.
    #[must_use]
    pub fn house(id: PitId, owner: PlayerId, seeds: u32) -> Self {
        Self {
            id,
            owner,
            kind: PitKind::House,
            seeds,
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn store(id: PitId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            kind: PitKind::Store,
            seeds: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PitId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn kind(&self) -> PitKind {
        self.kind
    }

    #[must_use]
    pub fn seeds(&self) -> u32 {
        self.seeds
    }

    #[must_use]
    pub fn is_house(&self) -> bool {
        self.kind == PitKind::House
    }

    #[must_use]
    pub fn is_store(&self) -> bool {
        self.kind == PitKind::Store
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds == 0
    }

    /// Add seeds to this pit.
    ///
    /// A board never holds more than `u32::MAX` seeds in total, so a single
    /// pit cannot overflow.
    pub fn add_seeds(&mut self, seeds: u32) {
        self.seeds += seeds;
    }

    /// Overwrite the seed count.
    pub fn set_seeds(&mut self, seeds: u32) {
        self.seeds = seeds;
    }

    /// Empty the pit, returning how many seeds it held.
    pub fn take_seeds(&mut self) -> u32 {
        std::mem::take(&mut self.seeds)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PitKind::House => write!(f, "H({})", self.seeds),
            PitKind::Store => write!(f, "S[{}]", self.seeds),
        }
    }
}
