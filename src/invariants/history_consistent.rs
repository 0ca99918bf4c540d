//! History consistency invariant: occupied squares match the history.

use super::Invariant;
use crate::engine::GameEngine;
use std::collections::HashSet;

/// Invariant: the occupied squares are exactly the recorded history.
///
/// Every recorded move corresponds to an occupied square, no position
/// is recorded twice, and no square is filled without a record.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let distinct: HashSet<_> = engine.history().iter().copied().collect();
        if distinct.len() != engine.history().len() {
            return false;
        }

        let all_recorded_occupied = engine
            .history()
            .iter()
            .all(|pos| !engine.board().is_empty(*pos));

        all_recorded_occupied && engine.board().occupied_count() == engine.history().len()
    }

    fn description() -> &'static str {
        "Occupied squares are exactly the recorded move history"
    }
}
