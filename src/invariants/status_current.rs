//! Status currency invariant: the stored status matches the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;

/// Invariant: the stored status equals a fresh evaluation of the board.
///
/// Every mutation recomputes the status, so a caller can never observe
/// a stale terminal state.
pub struct StatusCurrentInvariant;

impl Invariant<GameEngine> for StatusCurrentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.status() == rules::evaluate(engine.board(), engine.win_length())
    }

    fn description() -> &'static str {
        "Stored status matches a fresh evaluation of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::position::Position;
    use crate::types::{GameStatus, Player};

    #[test]
    fn test_status_current_through_win() {
        let mut engine = GameEngine::new(GameConfig::default());
        let moves = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];
        for (row, col) in moves {
            engine.select(Position::new(row, col)).unwrap();
            assert!(StatusCurrentInvariant::holds(&engine));
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_current_after_undo_from_win() {
        let mut engine = GameEngine::new(GameConfig::default());
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            engine.select(Position::new(row, col)).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::X));

        engine.undo().unwrap();
        assert!(StatusCurrentInvariant::holds(&engine));
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}
