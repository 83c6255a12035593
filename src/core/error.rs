//! Error types for the rules engine.
//!
//! Every fallible operation validates before it mutates, so an `Err` always
//! means the game is exactly as it was before the call.

use thiserror::Error;

use super::player::PlayerId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KalahaError>;

/// Errors surfaced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KalahaError {
    /// The selected house is out of range for the mover, or empty.
    ///
    /// `valid` lists the mover's currently playable house indices in
    /// ascending order.
    #[error("{player} cannot sow from house {house}; valid houses are {valid:?}")]
    InvalidHouseSelection {
        player: PlayerId,
        house: usize,
        valid: Vec<usize>,
    },

    /// A move was attempted after the game ended.
    #[error("game has finished; start a new game to play again")]
    GameAlreadyFinished,

    /// A serialized board state could not be parsed.
    #[error("malformed board state: {0}")]
    MalformedBoardState(#[from] BoardStateError),
}

/// Why a serialized board state was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardStateError {
    #[error("board state is empty")]
    Empty,

    #[error("expected {expected} values, found {found}")]
    WrongTokenCount { expected: usize, found: usize },

    #[error("value {token:?} at position {position} is not a non-negative integer")]
    InvalidToken { position: usize, token: String },

    #[error("player to move {mover} is out of range for {player_count} players")]
    MoverOutOfRange { mover: usize, player_count: usize },

    /// Seed counts whose sum does not fit in a `u32`.
    #[error("board holds {total} seeds; at most {} are supported", u32::MAX)]
    TooManySeeds { total: u64 },
}
