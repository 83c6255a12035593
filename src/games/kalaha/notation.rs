//! Board-state notation.
//!
//! A board is written as `|`-separated integers: the index of the player to
//! move, then the seed count of every pit in ring order starting at player
//! 0's first house.
//!
//! ```text
//! 0|6|6|6|6|6|6|0|6|6|6|6|6|6|0
//! ^ mover
//!   ^^^^^^^^^^^ player 0 houses
//!               ^ player 0 store
//!                 ^^^^^^^^^^^ player 1 houses
//!                             ^ player 1 store
//! ```
//!
//! Whitespace anywhere in the string is ignored. Whether the game is finished
//! is not written down; it follows from the seed counts.

use std::fmt;
use std::str::FromStr;

use crate::core::{BoardStateError, GameConfig};

/// Parsed board state: mover index and per-pit seed counts in ring order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub mover: usize,
    pub seeds: Vec<u32>,
}

impl BoardState {
    /// Parse and check the shape against `config`.
    pub fn parse(s: &str, config: &GameConfig) -> Result<Self, BoardStateError> {
        let state: Self = s.parse()?;
        state.validate(config)?;
        Ok(state)
    }

    /// Check token count, mover range and seed total against `config`.
    pub fn validate(&self, config: &GameConfig) -> Result<(), BoardStateError> {
        let found = self.seeds.len() + 1;
        if found != config.board_state_len() {
            return Err(BoardStateError::WrongTokenCount {
                expected: config.board_state_len(),
                found,
            });
        }
        if self.mover >= config.player_count {
            return Err(BoardStateError::MoverOutOfRange {
                mover: self.mover,
                player_count: config.player_count,
            });
        }
        let total = self.total_seeds();
        if total > u64::from(u32::MAX) {
            return Err(BoardStateError::TooManySeeds { total });
        }
        Ok(())
    }

    /// Sum of all seed counts.
    #[must_use]
    pub fn total_seeds(&self) -> u64 {
        self.seeds.iter().copied().map(u64::from).sum()
    }
}

impl FromStr for BoardState {
    type Err = BoardStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(BoardStateError::Empty);
        }

        let values = compact
            .split('|')
            .enumerate()
            .map(|(position, token)| {
                token.parse::<u32>().map_err(|_| BoardStateError::InvalidToken {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (mover, seeds) = values.split_first().ok_or(BoardStateError::Empty)?;

        Ok(Self {
            mover: *mover as usize,
            seeds: seeds.to_vec(),
        })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mover)?;
        for seeds in &self.seeds {
            write!(f, "|{seeds}")?;
        }
        Ok(())
    }
}
