//! Kalaha: six houses and a store per player, sown counter-clockwise.
//!
//! - Sow all seeds from one of your houses, one per pit, skipping
//!   opponents' stores
//! - Last seed in your store: move again
//! - Last seed in an empty house of yours: capture it and the facing house
//! - When anyone's houses are empty the game ends; the others sweep their
//!   houses into their stores and the biggest store wins
//!
//! Supports any even number of players from 2 to 8 to keep the rules
//! free of two-player assumptions.

mod builder;
mod game;
pub mod notation;

pub use builder::GameBuilder;
pub use game::Game;
pub use notation::BoardState;
