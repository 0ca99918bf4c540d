//! First-class move events and the errors they can raise.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
///
/// Moves are plain domain events; they can be logged, serialized for
/// replay, and validated independently of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position)
    }
}

/// Error raised when a move cannot be applied.
///
/// Selecting an occupied square is NOT an error: the engine silently
/// ignores it, mirroring the behavior the frontends were built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("position {} is outside the {}x{} board", position, size, size)]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },
}
