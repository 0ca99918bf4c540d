//! Move count invariant: the counter tracks the board.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: `move_count` equals the history length and the number of
/// occupied squares.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.move_count() == engine.history().len()
            && engine.move_count() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals history length and occupied squares"
    }
}
