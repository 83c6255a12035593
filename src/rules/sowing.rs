//! Sowing: lifting a house and distributing its seeds around the ring.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, KalahaError, PitId, PitKind, PlayerId, Result};

/// House indices with inline storage sized for the classic board.
pub type HouseList = SmallVec<[usize; 8]>;

/// Indices of the player's houses that currently hold seeds.
#[must_use]
pub fn legal_houses(board: &Board, player: PlayerId) -> HouseList {
    board
        .houses(player)
        .iter()
        .enumerate()
        .filter(|(_, pit)| !pit.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Resolve a house index to its ring position, rejecting empty or
/// out-of-range selections.
pub fn validate_house(board: &Board, player: PlayerId, house: usize) -> Result<PitId> {
    board
        .house(player, house)
        .filter(|&id| board.seeds(id) > 0)
        .ok_or_else(|| KalahaError::InvalidHouseSelection {
            player,
            house,
            valid: legal_houses(board, player).into_vec(),
        })
}

/// Sow every seed from `player`'s `house`-th house.
///
/// Seeds go one per pit starting at the pit after the house. Other players'
/// stores are skipped without consuming a seed. Returns the pit that
/// received the last seed.
///
/// The board is untouched when the selection is invalid.
pub fn sow(board: &mut Board, player: PlayerId, house: usize) -> Result<PitId> {
    let start = validate_house(board, player, house)?;

    let mut remaining = board.take_seeds(start);
    let mut pit = start;

    while remaining > 0 {
        pit = board.next(pit);

        if board.kind(pit) == PitKind::Store && board.owner(pit) != player {
            trace!(%player, %pit, "skipping opponent store");
            continue;
        }

        board.add_seeds(pit, 1);
        remaining -= 1;
    }

    Ok(pit)
}
