//! Core engine types: players, pits, the board ring, configuration, moves, errors.
//!
//! This module holds the data model. Rules that move seeds around live in
//! `rules`; the `Game` orchestrator lives in `games::kalaha`.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod pit;
pub mod player;

pub use action::{Move, MoveRecord};
pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardStateError, KalahaError, Result};
pub use pit::{Pit, PitId, PitKind};
pub use player::{Player, PlayerId, PlayerMap};
