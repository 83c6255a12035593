//! Kalaha game orchestration.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::builder::GameBuilder;
use super::notation::BoardState;
use crate::core::{
    Board, GameConfig, KalahaError, Move, MoveRecord, PitId, Player, PlayerId, PlayerMap, Result,
};
use crate::rules::{self, GameResult, HouseList};

/// A game of Kalaha in progress or finished.
///
/// Owns the board and the seated players, tracks whose turn it is, and
/// applies moves atomically: a move either fully resolves (sow, capture,
/// turn switch, termination sweep) or is rejected with the game unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    players: PlayerMap<Player>,
    to_move: PlayerId,
    finished: bool,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a fresh two-player game on the classic board.
    ///
    /// ```
    /// use kalaha::Game;
    ///
    /// let game = Game::new("Me", "You");
    /// assert_eq!(game.board_state(), "0|6|6|6|6|6|6|0|6|6|6|6|6|6|0");
    /// ```
    #[must_use]
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        GameBuilder::new()
            .player_names([player1.into(), player2.into()])
            .build()
    }

    /// Restore a two-player classic game from its board state string.
    ///
    /// ```
    /// use kalaha::Game;
    ///
    /// let mut game = Game::from_board_state("0|2|2|1|11|11|9|3|8|8|7|7|0|1|2", "A", "B")?;
    /// game.make_move(3)?;
    /// assert_eq!(game.board_state(), "1|3|3|1|0|12|10|4|9|9|8|8|1|2|2");
    /// # Ok::<(), kalaha::KalahaError>(())
    /// ```
    pub fn from_board_state(
        state: &str,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Result<Self> {
        GameBuilder::new()
            .player_names([player1.into(), player2.into()])
            .build_from_state(state)
    }

    /// Seat players on a fresh board.
    pub(crate) fn from_parts(config: GameConfig, names: Vec<String>) -> Self {
        let board = Board::new(config);
        let players = PlayerMap::new(config.player_count, |id| {
            let name = names
                .get(id.index())
                .cloned()
                .unwrap_or_else(|| format!("Player {}", id.index() + 1));
            Player::new(
                id,
                name,
                PitId::new(id.index() * config.pits_per_player()),
                config.houses_per_player,
                config.player_count,
            )
        });

        Self {
            board,
            players,
            to_move: PlayerId::new(0),
            finished: false,
            history: Vec::new(),
        }
    }

    /// Seat players and apply a validated board state.
    pub(crate) fn restore(config: GameConfig, names: Vec<String>, state: &BoardState) -> Self {
        let mut game = Self::from_parts(config, names);

        for (i, &seeds) in state.seeds.iter().enumerate() {
            game.board.set_seeds(PitId::new(i), seeds);
        }
        game.to_move = PlayerId::new(state.mover as u8);
        game.finished = rules::is_terminal(&game.board);

        let total = game.board.total_seeds();
        if total != config.total_seeds() {
            warn!(
                total,
                expected = config.total_seeds(),
                "restored board does not hold the standard seed count"
            );
        }
        debug!(state = %state, finished = game.finished, "restored game");

        game
    }

    /// Sow from the mover's `house`-th house (0-based) and resolve the move.
    ///
    /// Order of resolution:
    /// 1. sow, skipping opponents' stores
    /// 2. capture, if the last seed made an own house hold exactly one seed
    /// 3. turn switch, unless the last seed landed in the mover's store
    /// 4. termination: if any player's houses are empty, everyone else
    ///    sweeps their houses into their store and the game ends
    ///
    /// # Errors
    ///
    /// - `GameAlreadyFinished` if the game has ended
    /// - `InvalidHouseSelection` if `house` is out of range or empty
    ///
    /// The game is unchanged on error.
    pub fn make_move(&mut self, house: usize) -> Result<MoveRecord> {
        if self.finished {
            return Err(KalahaError::GameAlreadyFinished);
        }

        let mover = self.to_move;
        let landing = rules::sow(&mut self.board, mover, house)?;
        let captured = rules::apply_capture(&mut self.board, mover, landing);
        self.to_move = rules::next_mover(&self.board, mover, landing);

        if rules::is_terminal(&self.board) {
            self.finished = true;
            let swept = rules::sweep(&mut self.board);
            let totals = rules::store_totals(&self.board);
            info!(
                result = ?rules::score(&self.board),
                stores = ?totals.values().collect::<Vec<_>>(),
                swept = ?swept.values().collect::<Vec<_>>(),
                "game finished"
            );
        }

        let record = MoveRecord {
            mv: Move::new(mover, house),
            landing,
            captured,
            next_player: self.to_move,
            finished: self.finished,
        };
        debug!(
            %mover,
            house,
            %landing,
            captured,
            next = %self.to_move,
            state = %self.board_state(),
            "move applied"
        );

        self.history.push(record.clone());
        Ok(record)
    }

    /// True once any player's houses have run out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Final result, once the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.finished.then(|| rules::score(&self.board))
    }

    /// The player with the strictly highest store, or `None` on a tie.
    ///
    /// Reflects the current stores whether or not the game has finished.
    #[must_use]
    pub fn winning_player(&self) -> Option<&Player> {
        rules::score(&self.board)
            .winner()
            .map(|id| &self.players[id])
    }

    /// Serialize the board (see `notation`).
    #[must_use]
    pub fn board_state(&self) -> String {
        self.snapshot().to_string()
    }

    /// Board state in parsed form.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        let start = self.players[PlayerId::new(0)].first_house();
        BoardState {
            mover: self.to_move.index(),
            seeds: self.board.ring_from(start).map(|pit| pit.seeds()).collect(),
        }
    }

    /// Houses the mover may sow from. Empty once the game is finished.
    #[must_use]
    pub fn legal_houses(&self) -> HouseList {
        if self.finished {
            return HouseList::new();
        }
        rules::legal_houses(&self.board, self.to_move)
    }

    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.legal_houses().is_empty()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player_to_move(&self) -> &Player {
        &self.players[self.to_move]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Seeds in a player's `house`-th house, if in range.
    #[must_use]
    pub fn house_seeds(&self, player: PlayerId, house: usize) -> Option<u32> {
        self.board.house_seeds(player, house)
    }

    #[must_use]
    pub fn store_seeds(&self, player: PlayerId) -> u32 {
        self.board.store_seeds(player)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.board.config()
    }

    /// Moves applied since this game was created or restored.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, player) in self.players.iter() {
            let marker = if id == self.to_move && !self.finished { '*' } else { ' ' };
            write!(f, "{marker} {player}:")?;
            for pit in self.board.houses(id) {
                write!(f, " {pit}")?;
            }
            writeln!(f, " {}", self.board.pit(player.store()))?;
        }
        if self.finished {
            write!(f, "finished")?;
        } else {
            write!(f, "in progress")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new("Me", "You");

        assert_eq!(game.player_to_move().name(), "Me");
        assert_eq!(game.player(PlayerId::new(1)).name(), "You");
        assert_eq!(game.players().player_count(), 2);
        assert_eq!(game.house_seeds(PlayerId::new(0), 0), Some(6));
        assert_eq!(game.store_seeds(PlayerId::new(0)), 0);
        assert!(game.winning_player().is_none());
        assert!(game.result().is_none());
        assert!(!game.is_finished());
        assert_eq!(game.legal_houses().as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_player_pits_match_board() {
        let game = Game::new("Me", "You");

        for (id, player) in game.players().iter() {
            assert_eq!(player.store(), game.board().store(id));
            assert_eq!(player.house(0), game.board().house(id, 0));
            assert!(player.houses().all(|h| game.board().owner(h) == id));
        }
    }

    #[test]
    fn test_extra_turn_on_own_store() {
        let mut game = Game::new("Me", "You");
        let record = game.make_move(0).unwrap();

        assert!(record.extra_turn());
        assert_eq!(record.landing, PitId::new(6));
        assert_eq!(game.player_to_move().index(), 0);
        assert_eq!(game.board_state(), "0|0|7|7|7|7|7|1|6|6|6|6|6|6|0");
    }

    #[test]
    fn test_turn_passes_otherwise() {
        let mut game = Game::new("Me", "You");
        let record = game.make_move(5).unwrap();

        assert!(!record.extra_turn());
        assert_eq!(game.player_to_move().index(), 1);
        assert_eq!(game.board_state(), "1|6|6|6|6|6|0|1|7|7|7|7|7|6|0");
    }

    #[test]
    fn test_long_sow_wraps_past_opponent_store() {
        let mut game = Game::from_board_state("0|2|2|1|11|11|9|3|8|8|7|7|0|1|2", "A", "B").unwrap();
        let record = game.make_move(3).unwrap();

        // Last seed lands in house 1, which already held seeds: no capture.
        assert_eq!(record.landing, PitId::new(1));
        assert_eq!(record.captured, 0);
        assert_eq!(game.board_state(), "1|3|3|1|0|12|10|4|9|9|8|8|1|2|2");
        assert_eq!(game.history(), &[record]);
    }

    #[test]
    fn test_move_after_finish_rejected() {
        let mut game = Game::from_board_state("0|0|0|0|0|0|1|35|0|0|0|0|0|1|35", "Me", "You").unwrap();
        game.make_move(5).unwrap();
        let state = game.board_state();

        assert_eq!(game.make_move(0), Err(KalahaError::GameAlreadyFinished));
        assert_eq!(game.board_state(), state);
        assert!(game.legal_houses().is_empty());
        assert!(!game.has_legal_move());
    }

    #[test]
    fn test_restored_finished_board() {
        let game = Game::from_board_state("1|0|0|0|0|0|0|40|1|0|0|0|0|0|31", "Me", "You").unwrap();

        assert!(game.is_finished());
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(0))));
        // No sweep on restore; only a finishing move sweeps.
        assert_eq!(game.house_seeds(PlayerId::new(1), 0), Some(1));
    }

    #[test]
    fn test_display() {
        let game = Game::new("Me", "You");
        let text = game.to_string();

        assert!(text.starts_with("* Me (Player 0): H(6) H(6) H(6) H(6) H(6) H(6) S[0]\n"));
        assert!(text.contains("  You (Player 1): H(6)"));
        assert!(text.ends_with("in progress"));
    }

    #[test]
    fn test_game_serializes() {
        let mut game = Game::new("Me", "You");
        game.make_move(2).unwrap();

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["finished"], false);
        assert_eq!(json["history"].as_array().unwrap().len(), 1);
    }
}
