//! Moves and move records.
//!
//! A move is a single choice: which of the mover's houses to sow from.
//! Applying a move produces a `MoveRecord` describing what happened, which
//! the game keeps as history.

use serde::{Deserialize, Serialize};

use super::pit::PitId;
use super::player::PlayerId;

/// A house selection by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player sowing.
    pub player: PlayerId,

    /// Index of the house within the player's houses (0-based).
    pub house: usize,
}

impl Move {
    #[must_use]
    pub fn new(player: PlayerId, house: usize) -> Self {
        Self { player, house }
    }
}

/// Outcome of an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// Pit that received the last seed.
    pub landing: PitId,

    /// Seeds moved to the mover's store by a capture (0 when none).
    pub captured: u32,

    /// Player to move after this one.
    pub next_player: PlayerId,

    /// Whether this move ended the game.
    pub finished: bool,
}

impl MoveRecord {
    /// True when the mover keeps the turn (last seed landed in their store).
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        self.next_player == self.mv.player
    }

    /// True when the move captured seeds.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
