//! # kalaha
//!
//! Rules engine for Kalaha, the seed-sowing board game.
//!
//! ## Design Principles
//!
//! 1. **Flat Board**: All pits live in one array in ring order. "Next pit" is
//!    index arithmetic and facing houses come from a table built once, so the
//!    board has no reference cycles.
//!
//! 2. **Atomic Moves**: `Game::make_move` validates first, then sows,
//!    captures, switches turn and checks termination in one call. A rejected
//!    move leaves the game untouched.
//!
//! 3. **N-Player Ready**: The classic table is two players with six houses of
//!    six seeds, but any even player count up to eight works.
//!
//! ## Example
//!
//! ```
//! use kalaha::{Game, KalahaError};
//!
//! let mut game = Game::new("Me", "You");
//! let record = game.make_move(0)?;
//! assert!(record.extra_turn());
//! assert_eq!(game.board_state(), "0|0|7|7|7|7|7|1|6|6|6|6|6|6|0");
//!
//! // House 0 is now empty.
//! assert!(matches!(
//!     game.make_move(0),
//!     Err(KalahaError::InvalidHouseSelection { .. })
//! ));
//! # Ok::<(), KalahaError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Player IDs, pits, the board ring, configuration, moves, errors
//! - `rules`: Sowing, capture, turn switching, termination and scoring
//! - `games`: The `Game` orchestrator, builder and board-state notation

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardStateError, GameConfig, KalahaError, Move, MoveRecord, Pit, PitId, PitKind,
    Player, PlayerId, PlayerMap, Result,
};

pub use crate::games::kalaha::{BoardState, Game, GameBuilder};

pub use crate::rules::{GameResult, HouseList};
