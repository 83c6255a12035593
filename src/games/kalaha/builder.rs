//! Builder for non-default tables.

use tracing::debug;

use super::game::Game;
use super::notation::BoardState;
use crate::core::{GameConfig, Result};

/// Builder for creating a `Game`.
///
/// ```
/// use kalaha::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player_count(4)
///     .houses_per_player(4)
///     .initial_seeds(3)
///     .player_names(["Ann", "Bo", "Cy", "Di"])
///     .build();
///
/// assert_eq!(game.board().len(), 20);
/// assert_eq!(game.board().total_seeds(), 48);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    names: Vec<String>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole board configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config` is not a playable shape (see
    /// [`GameConfig::assert_valid`]).
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        config.assert_valid();
        self.config = config;
        self
    }

    /// # Panics
    ///
    /// Panics unless `count` is even and between 2 and 8.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config = self.config.with_player_count(count);
        self
    }

    /// # Panics
    ///
    /// Panics if `houses` is zero.
    #[must_use]
    pub fn houses_per_player(mut self, houses: usize) -> Self {
        self.config = self.config.with_houses_per_player(houses);
        self
    }

    #[must_use]
    pub fn initial_seeds(mut self, seeds: u32) -> Self {
        self.config = self.config.with_initial_seeds(seeds);
        self
    }

    /// Display names in seating order. Unnamed seats become "Player N".
    #[must_use]
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Start a fresh game.
    #[must_use]
    pub fn build(self) -> Game {
        debug!(config = ?self.config, "new game");
        Game::from_parts(self.config, self.names)
    }

    /// Restore a game from a board state string.
    ///
    /// # Errors
    ///
    /// `MalformedBoardState` if the string is empty, holds a non-numeric or
    /// negative value, has the wrong number of values for this board, names
    /// a player to move that is not seated, or holds more than `u32::MAX`
    /// seeds in total.
    pub fn build_from_state(self, state: &str) -> Result<Game> {
        let state = BoardState::parse(state, &self.config)?;
        Ok(Game::restore(self.config, self.names, &state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardStateError, KalahaError, PlayerId};

    #[test]
    fn test_default_build() {
        let game = GameBuilder::new().build();

        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.player(PlayerId::new(0)).name(), "Player 1");
        assert_eq!(game.player(PlayerId::new(1)).name(), "Player 2");
    }

    #[test]
    fn test_partial_names() {
        let game = GameBuilder::new()
            .player_count(4)
            .player_names(["North"])
            .build();

        assert_eq!(game.player(PlayerId::new(0)).name(), "North");
        assert_eq!(game.player(PlayerId::new(3)).name(), "Player 4");
    }

    #[test]
    fn test_build_from_state_uses_config() {
        let game = GameBuilder::new()
            .houses_per_player(3)
            .build_from_state("1|1|2|3|4|0|0|5|9")
            .unwrap();

        assert_eq!(game.player_to_move().index(), 1);
        assert_eq!(game.house_seeds(PlayerId::new(1), 0), Some(0));
        assert_eq!(game.store_seeds(PlayerId::new(1)), 9);
        assert!(!game.is_finished());
    }

    #[test]
    #[should_panic(expected = "Player count must be even")]
    fn test_config_with_odd_player_count_rejected() {
        let config = GameConfig {
            player_count: 3,
            ..GameConfig::default()
        };
        let _ = GameBuilder::new().config(config).build();
    }

    #[test]
    fn test_build_from_state_rejects_classic_string_on_small_board() {
        let err = GameBuilder::new()
            .houses_per_player(3)
            .build_from_state("0|6|6|6|6|6|6|0|6|6|6|6|6|6|0")
            .unwrap_err();

        assert_eq!(
            err,
            KalahaError::MalformedBoardState(BoardStateError::WrongTokenCount {
                expected: 9,
                found: 15,
            })
        );
    }
}
