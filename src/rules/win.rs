//! Win detection over rows, columns, and both diagonal orientations.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Finds a winner on the board, if any.
///
/// Axes are checked in a fixed order: rows, then columns, then NW-SE
/// diagonals, then NE-SW diagonals. The first axis containing a run of
/// `win_length` identical marks decides the result; a move that happens
/// to complete lines on several axes at once is resolved by this order.
///
/// Every diagonal of the board is scanned, not just the two corner
/// diagonals: an `n`-by-`n` board has `2n - 1` diagonals per
/// orientation.
#[instrument(skip(board))]
pub fn find_winner(board: &Board, win_length: usize) -> Option<Player> {
    let n = board.size();

    // Rows.
    for row in 0..n {
        let winner = scan_line((0..n).map(|col| board.square_at(row, col)), win_length);
        if winner.is_some() {
            return winner;
        }
    }

    // Columns.
    for col in 0..n {
        let winner = scan_line((0..n).map(|row| board.square_at(row, col)), win_length);
        if winner.is_some() {
            return winner;
        }
    }

    // NW-SE diagonals, anchored on the left column and the top row.
    for start_row in 0..n {
        let winner = scan_line(
            (0..n - start_row).map(|i| board.square_at(start_row + i, i)),
            win_length,
        );
        if winner.is_some() {
            return winner;
        }
    }
    for start_col in 1..n {
        let winner = scan_line(
            (0..n - start_col).map(|i| board.square_at(i, start_col + i)),
            win_length,
        );
        if winner.is_some() {
            return winner;
        }
    }

    // NE-SW diagonals, anchored on the top row and the right column.
    for start_col in 0..n {
        let winner = scan_line(
            (0..=start_col).map(|i| board.square_at(i, start_col - i)),
            win_length,
        );
        if winner.is_some() {
            return winner;
        }
    }
    for start_row in 1..n {
        let winner = scan_line(
            (0..n - start_row).map(|i| board.square_at(start_row + i, n - 1 - i)),
            win_length,
        );
        if winner.is_some() {
            return winner;
        }
    }

    None
}

/// Scans a single line for a run of `win_length` identical marks.
///
/// A run resets on an empty square or a mark change. Each line carries
/// its own counter; nothing leaks between line scans.
fn scan_line(line: impl Iterator<Item = Square>, win_length: usize) -> Option<Player> {
    let mut run_player: Option<Player> = None;
    let mut run_len = 0;

    for square in line {
        match square {
            Square::Occupied(player) if run_player == Some(player) => run_len += 1,
            Square::Occupied(player) => {
                run_player = Some(player);
                run_len = 1;
            }
            Square::Empty => {
                run_player = None;
                run_len = 0;
            }
        }
        if run_len >= win_length && run_player.is_some() {
            return run_player;
        }
    }

    None
}
