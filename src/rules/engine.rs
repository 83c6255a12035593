//! Turn rotation, termination, and scoring.
//!
//! These rules run after sowing and capture have settled:
//! - Landing in your own store earns another turn
//! - The game ends as soon as any player has no seeds left in their houses
//! - On that move every other player sweeps their houses into their store
//! - The highest store wins; a shared highest store is a draw

use serde::{Deserialize, Serialize};

use crate::core::{Board, PitId, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Two or more players share the highest store.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Who moves after `mover` sowed and finished on `landing`.
#[must_use]
pub fn next_mover(board: &Board, mover: PlayerId, landing: PitId) -> PlayerId {
    if landing == board.store(mover) {
        mover
    } else {
        mover.next(board.config().player_count)
    }
}

/// True when any player's houses are all empty.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    PlayerId::all(board.config().player_count).any(|p| board.all_houses_empty(p))
}

/// Move every remaining house seed into its owner's store.
///
/// Returns how many seeds each player swept.
pub fn sweep(board: &mut Board) -> PlayerMap<u32> {
    let player_count = board.config().player_count;
    let mut swept = PlayerMap::with_value(player_count, 0);

    for player in PlayerId::all(player_count) {
        let houses: Vec<PitId> = board.houses(player).iter().map(|pit| pit.id()).collect();
        let total: u32 = houses.into_iter().map(|id| board.take_seeds(id)).sum();
        board.add_seeds(board.store(player), total);
        swept[player] = total;
    }

    swept
}

/// Store totals per player.
#[must_use]
pub fn store_totals(board: &Board) -> PlayerMap<u32> {
    PlayerMap::new(board.config().player_count, |p| board.store_seeds(p))
}

/// Score the board by store totals.
#[must_use]
pub fn score(board: &Board) -> GameResult {
    let totals = store_totals(board);
    let best = totals.values().copied().max().unwrap_or(0);
    let mut leaders = totals.iter().filter(|&(_, seeds)| *seeds == best);

    match (leaders.next(), leaders.next()) {
        (Some((player, _)), None) => GameResult::Winner(player),
        _ => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn board() -> Board {
        Board::new(GameConfig::default())
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_next_mover() {
        let board = board();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(next_mover(&board, p0, PitId::new(6)), p0);
        assert_eq!(next_mover(&board, p0, PitId::new(13)), p1);
        assert_eq!(next_mover(&board, p0, PitId::new(3)), p1);
        assert_eq!(next_mover(&board, p1, PitId::new(13)), p1);
        assert_eq!(next_mover(&board, p1, PitId::new(6)), p0);
    }

    #[test]
    fn test_terminal_when_one_side_empty() {
        let mut board = board();
        assert!(!is_terminal(&board));

        for house in 0..6 {
            board.set_seeds(PitId::new(house), 0);
        }
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_sweep_moves_houses_to_stores() {
        let mut board = board();
        for house in 0..6 {
            board.set_seeds(PitId::new(house), 0);
        }
        board.set_seeds(PitId::new(13), 4);

        let swept = sweep(&mut board);

        assert_eq!(swept[PlayerId::new(0)], 0);
        assert_eq!(swept[PlayerId::new(1)], 36);
        assert_eq!(board.store_seeds(PlayerId::new(1)), 40);
        assert!(board.all_houses_empty(PlayerId::new(1)));
    }

    #[test]
    fn test_score_winner_and_draw() {
        let mut board = board();
        assert_eq!(score(&board), GameResult::Draw);

        board.set_seeds(PitId::new(6), 10);
        board.set_seeds(PitId::new(13), 9);
        assert_eq!(score(&board), GameResult::Winner(PlayerId::new(0)));

        board.set_seeds(PitId::new(13), 10);
        assert_eq!(score(&board), GameResult::Draw);
    }

    #[test]
    fn test_score_tie_below_leader_still_wins() {
        let config = GameConfig::default().with_player_count(4);
        let mut board = Board::new(config);

        board.set_seeds(board.store(PlayerId::new(0)), 5);
        board.set_seeds(board.store(PlayerId::new(1)), 5);
        board.set_seeds(board.store(PlayerId::new(2)), 12);

        assert_eq!(score(&board), GameResult::Winner(PlayerId::new(2)));
    }
}
