//! Heuristic computer opponent.
//!
//! One-ply search: every empty square is scored independently and the
//! best one is played. No lookahead beyond the immediate move.

use crate::position::{Direction, Position};
use crate::rules;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Score for a square that wins the game outright.
const WIN_SCORE: i32 = 200;
/// Score for a square that blocks an opponent win.
const BLOCK_SCORE: i32 = 100;

/// Picks the best square for `computer` to play, or `None` on a full board.
///
/// Every empty square is scored:
/// - [`WIN_SCORE`] if placing the computer's mark there wins;
/// - [`BLOCK_SCORE`] if placing the human's mark there would win for
///   the human (the square blocks);
/// - plus a combo score rewarding adjacency to existing runs of either
///   player's marks.
///
/// Ties break toward the first maximal square in row-major order.
#[instrument(skip(board))]
pub(crate) fn choose_move(
    board: &Board,
    win_length: usize,
    computer: Player,
    human: Player,
) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::valid_moves(board) {
        let score = score_square(board, win_length, pos, computer, human);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(%pos, score, "Computer move chosen");
        Some(pos)
    } else {
        debug!("Board is full, computer passes");
        None
    }
}

/// Scores one empty square.
///
/// Speculative placements go on a scratch copy of the board; the
/// authoritative board is never touched.
fn score_square(
    board: &Board,
    win_length: usize,
    pos: Position,
    computer: Player,
    human: Player,
) -> i32 {
    let mut score = 0;
    let mut scratch = board.clone();

    scratch.set(pos, Square::Occupied(computer)).unwrap();
    if rules::win::find_winner(&scratch, win_length) == Some(computer) {
        score += WIN_SCORE;
    }

    scratch.set(pos, Square::Occupied(human)).unwrap();
    if rules::win::find_winner(&scratch, win_length) == Some(human) {
        score += BLOCK_SCORE;
    }

    score + combo_score(board, pos, computer) + combo_score(board, pos, human)
}

/// Sums the runs of `player`'s marks radiating out from `pos`.
///
/// For each of the eight directions, counts the contiguous same-mark
/// squares starting immediately adjacent to `pos` and extending outward
/// until a different square or the board edge.
fn combo_score(board: &Board, pos: Position, player: Player) -> i32 {
    Direction::iter()
        .map(|dir| run_from(board, pos, dir, player))
        .sum()
}

/// Length of the contiguous run of `player`'s marks adjacent to `pos`
/// in one direction.
fn run_from(board: &Board, pos: Position, direction: Direction, player: Player) -> i32 {
    let size = board.size();
    let mut len = 0;
    let mut cursor = pos;

    while let Some(next) = cursor.step(direction, size) {
        if board.get(next) != Some(Square::Occupied(player)) {
            break;
        }
        len += 1;
        cursor = next;
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: usize, col: usize, player: Player) {
        board
            .set(Position::new(row, col), Square::Occupied(player))
            .unwrap();
    }

    #[test]
    fn test_run_from_counts_adjacent_marks() {
        let mut board = Board::new(5);
        place(&mut board, 2, 3, Player::O);
        place(&mut board, 2, 4, Player::O);

        let pos = Position::new(2, 2);
        assert_eq!(run_from(&board, pos, Direction::East, Player::O), 2);
        assert_eq!(run_from(&board, pos, Direction::West, Player::O), 0);
        assert_eq!(run_from(&board, pos, Direction::East, Player::X), 0);
    }

    #[test]
    fn test_run_from_stops_at_gap() {
        let mut board = Board::new(5);
        place(&mut board, 2, 3, Player::O);
        // Gap at (2, 4) is implicit; run beyond it must not count.
        assert_eq!(
            run_from(&board, Position::new(2, 2), Direction::East, Player::O),
            1
        );
    }

    #[test]
    fn test_combo_score_sums_directions() {
        let mut board = Board::new(3);
        place(&mut board, 0, 1, Player::X);
        place(&mut board, 2, 1, Player::X);
        // Center square touches one X above and one below.
        assert_eq!(combo_score(&board, Position::new(1, 1), Player::X), 2);
    }

    #[test]
    fn test_winning_square_preferred() {
        // O O _ on the top row: the computer (O) must complete it.
        let mut board = Board::new(3);
        place(&mut board, 0, 0, Player::O);
        place(&mut board, 0, 1, Player::O);
        place(&mut board, 1, 0, Player::X);
        place(&mut board, 1, 1, Player::X);

        let chosen = choose_move(&board, 3, Player::O, Player::X).unwrap();
        assert_eq!(chosen, Position::new(0, 2));
    }

    #[test]
    fn test_blocking_square_preferred() {
        // X X _ threatens a win; the computer holds nothing comparable.
        let mut board = Board::new(3);
        place(&mut board, 0, 0, Player::X);
        place(&mut board, 0, 1, Player::X);
        place(&mut board, 2, 2, Player::O);

        let chosen = choose_move(&board, 3, Player::O, Player::X).unwrap();
        assert_eq!(chosen, Position::new(0, 2));
    }

    #[test]
    fn test_win_outranks_block() {
        // Both players are one move from winning; the computer takes
        // its own win over the block.
        let mut board = Board::new(4);
        place(&mut board, 0, 0, Player::X);
        place(&mut board, 0, 1, Player::X);
        place(&mut board, 0, 2, Player::X);
        place(&mut board, 1, 0, Player::O);
        place(&mut board, 1, 1, Player::O);
        place(&mut board, 1, 2, Player::O);

        let chosen = choose_move(&board, 4, Player::O, Player::X).unwrap();
        assert_eq!(chosen, Position::new(1, 3));
    }

    #[test]
    fn test_full_board_no_move() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                place(&mut board, row, col, Player::X);
            }
        }
        assert_eq!(choose_move(&board, 3, Player::O, Player::X), None);
    }

    #[test]
    fn test_tie_breaks_to_first_in_scan_order() {
        // An empty board scores every square by combos only; all are
        // zero, so the first square in row-major order wins.
        let board = Board::new(3);
        let chosen = choose_move(&board, 3, Player::O, Player::X).unwrap();
        assert_eq!(chosen, Position::new(0, 0));
    }
}
