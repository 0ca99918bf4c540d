//! Validated construction parameters for a game.

use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Validated parameters for constructing a [`GameEngine`](crate::GameEngine).
///
/// The engine itself treats its parameters as documented preconditions;
/// this type is the boundary where they are actually enforced. A caller
/// collecting user input should funnel it through [`GameConfig::new`]
/// and surface the error on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    size: usize,
    /// Number of consecutive marks required to win.
    win_length: usize,
    /// Player who makes the first move.
    start_player: Player,
}

impl GameConfig {
    /// Smallest accepted board side length.
    pub const MIN_SIZE: usize = 3;
    /// Largest accepted board side length.
    pub const MAX_SIZE: usize = 14;

    /// Creates a validated configuration.
    ///
    /// Accepted parameters:
    /// - `size` between 3 and 14 inclusive;
    /// - on a 3x3 board the win length must be exactly 3;
    /// - on larger boards it must be greater than 3 and at most `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the parameter that was rejected.
    #[instrument]
    pub fn new(size: usize, win_length: usize, start_player: Player) -> Result<Self, ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(ConfigError::BoardSizeOutOfRange { size });
        }

        let win_length_ok = if size == Self::MIN_SIZE {
            win_length == 3
        } else {
            win_length > 3 && win_length <= size
        };
        if !win_length_ok {
            return Err(ConfigError::WinLengthOutOfRange { size, win_length });
        }

        debug!(size, win_length, ?start_player, "Config accepted");
        Ok(Self {
            size,
            win_length,
            start_player,
        })
    }
}

impl Default for GameConfig {
    /// The classic game: 3x3 board, three in a row, X starts.
    fn default() -> Self {
        Self {
            size: 3,
            win_length: 3,
            start_player: Player::X,
        }
    }
}

/// Rejected construction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board side length is outside 3..=14.
    #[display("board size {} is not between 3 and 14", size)]
    BoardSizeOutOfRange {
        /// The rejected side length.
        size: usize,
    },
    /// The win length does not fit the board.
    #[display(
        "win length {} is invalid for a {}x{} board (must be 3 when size is 3, otherwise greater than 3 and at most the board size)",
        win_length,
        size,
        size
    )]
    WinLengthOutOfRange {
        /// Side length the win length was checked against.
        size: usize,
        /// The rejected win length.
        win_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_config() {
        let config = GameConfig::new(3, 3, Player::X).unwrap();
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.win_length(), 3);
        assert_eq!(*config.start_player(), Player::X);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_large_board_config() {
        let config = GameConfig::new(14, 14, Player::O).unwrap();
        assert_eq!(*config.size(), 14);
        assert_eq!(*config.win_length(), 14);
    }

    #[test]
    fn test_size_bounds_rejected() {
        assert_eq!(
            GameConfig::new(2, 3, Player::X),
            Err(ConfigError::BoardSizeOutOfRange { size: 2 })
        );
        assert_eq!(
            GameConfig::new(15, 5, Player::X),
            Err(ConfigError::BoardSizeOutOfRange { size: 15 })
        );
    }

    #[test]
    fn test_win_length_must_be_three_on_classic_board() {
        assert!(GameConfig::new(3, 4, Player::X).is_err());
        assert!(GameConfig::new(3, 2, Player::X).is_err());
    }

    #[test]
    fn test_win_length_bounds_on_large_board() {
        // Three in a row is too easy on a board this big.
        assert!(GameConfig::new(10, 3, Player::X).is_err());
        assert!(GameConfig::new(10, 11, Player::X).is_err());
        assert!(GameConfig::new(10, 4, Player::X).is_ok());
        assert!(GameConfig::new(10, 10, Player::X).is_ok());
    }
}
