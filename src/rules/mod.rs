//! Pure rule evaluation: win and draw detection.

pub mod draw;
pub mod win;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the status of a board snapshot.
///
/// Pure function: nothing but the squares and the win length feed the
/// result. A winning run decides the game; a full board with no winner
/// is a draw; anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, win_length: usize) -> GameStatus {
    if let Some(winner) = win::find_winner(board, win_length) {
        GameStatus::Won(winner)
    } else if draw::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
