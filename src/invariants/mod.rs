//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

pub mod history_consistent;
pub mod move_count;
pub mod status_current;

pub use history_consistent::HistoryConsistentInvariant;
pub use move_count::MoveCountInvariant;
pub use status_current::StatusCurrentInvariant;

use crate::engine::GameEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryConsistentInvariant,
    MoveCountInvariant,
    StatusCurrentInvariant,
);

/// Debug-build invariant check, called after every engine mutation.
pub fn assert_invariants(engine: &GameEngine) {
    debug_assert!(
        HistoryConsistentInvariant::holds(engine),
        "History consistency violated"
    );
    debug_assert!(MoveCountInvariant::holds(engine), "Move count violated");
    debug_assert!(
        StatusCurrentInvariant::holds(engine),
        "Status currency violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let engine = GameEngine::new(GameConfig::default());
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.select(Position::new(0, 0)).unwrap();
        engine.select(Position::new(1, 1)).unwrap();
        engine.select(Position::new(0, 1)).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_computer_play() {
        let config = GameConfig::new(5, 4, Player::X).unwrap();
        let mut engine = GameEngine::new(config);
        engine.enable_computer();
        engine.player_select(Position::new(2, 2)).unwrap();
        engine.player_select(Position::new(2, 3)).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new(GameConfig::default());

        type TwoInvariants = (HistoryConsistentInvariant, MoveCountInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
