//! Kalaha rules.
//!
//! Rules are free functions over a `Board`:
//! - `sowing`: lifting a house and distributing its seeds
//! - `capture`: taking the facing house after landing in an empty own house
//! - `engine`: next mover, termination sweep, and scoring
//!
//! The `Game` orchestrator applies them in order: sow, capture, turn switch,
//! then termination.

pub mod capture;
pub mod engine;
pub mod sowing;

pub use capture::apply_capture;
pub use engine::{is_terminal, next_mover, score, store_totals, sweep, GameResult};
pub use sowing::{legal_houses, sow, validate_house, HouseList};
