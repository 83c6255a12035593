//! Capture rule.
//!
//! When the last seed lands in one of the mover's own houses and that house
//! now holds exactly one seed, the seed and everything in the facing house
//! move to the mover's store. Nothing happens if the facing house is empty.

use tracing::debug;

use crate::core::{Board, PitId, PlayerId};

/// Apply the capture rule for a move by `mover` that ended on `landing`.
///
/// Returns the number of seeds moved to the store (0 when no capture).
pub fn apply_capture(board: &mut Board, mover: PlayerId, landing: PitId) -> u32 {
    let pit = board.pit(landing);
    if !pit.is_house() || pit.owner() != mover || pit.seeds() != 1 {
        return 0;
    }

    let Some(across) = board.opposite(landing) else {
        return 0;
    };
    if board.seeds(across) == 0 {
        return 0;
    }

    let captured = board.take_seeds(across) + board.take_seeds(landing);
    board.add_seeds(board.store(mover), captured);

    debug!(%mover, %landing, %across, captured, "capture");
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn board() -> Board {
        Board::new(GameConfig::default())
    }

    #[test]
    fn test_capture_takes_facing_house() {
        let mut board = board();
        board.set_seeds(PitId::new(2), 1);

        let captured = apply_capture(&mut board, PlayerId::new(0), PitId::new(2));

        assert_eq!(captured, 7);
        assert_eq!(board.seeds(PitId::new(2)), 0);
        assert_eq!(board.seeds(PitId::new(10)), 0);
        assert_eq!(board.store_seeds(PlayerId::new(0)), 7);
        assert_eq!(board.total_seeds(), 72 - 6 + 1);
    }

    #[test]
    fn test_no_capture_when_facing_empty() {
        let mut board = board();
        board.set_seeds(PitId::new(2), 1);
        board.set_seeds(PitId::new(10), 0);

        assert_eq!(apply_capture(&mut board, PlayerId::new(0), PitId::new(2)), 0);
        assert_eq!(board.seeds(PitId::new(2)), 1);
        assert_eq!(board.store_seeds(PlayerId::new(0)), 0);
    }

    #[test]
    fn test_no_capture_in_opponent_house() {
        let mut board = board();
        board.set_seeds(PitId::new(9), 1);

        assert_eq!(apply_capture(&mut board, PlayerId::new(0), PitId::new(9)), 0);
        assert_eq!(board.seeds(PitId::new(9)), 1);
    }

    #[test]
    fn test_no_capture_with_more_than_one_seed() {
        let mut board = board();

        assert_eq!(apply_capture(&mut board, PlayerId::new(0), PitId::new(2)), 0);
        assert_eq!(board.seeds(PitId::new(2)), 6);
    }

    #[test]
    fn test_no_capture_in_store() {
        let mut board = board();
        board.set_seeds(PitId::new(6), 1);

        assert_eq!(apply_capture(&mut board, PlayerId::new(0), PitId::new(6)), 0);
        assert_eq!(board.store_seeds(PlayerId::new(0)), 1);
    }
}
