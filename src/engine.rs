//! The game engine: board, turn, and history bookkeeping.

use crate::action::{Move, MoveError};
use crate::ai;
use crate::config::GameConfig;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark assignment while the computer opponent is active.
///
/// Only exists while the computer is enabled, so the marks can never be
/// read in a disabled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerOpponent {
    computer: Player,
    human: Player,
}

impl ComputerOpponent {
    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }
}

/// Engine for one game session.
///
/// Owns the board, the turn state, and the move history. Callers drive
/// it through [`select`](Self::select) / [`player_select`](Self::player_select) /
/// [`undo`](Self::undo) / [`reset`](Self::reset) and read back
/// [`status`](Self::status) and [`board`](Self::board) to render.
///
/// The engine never resets itself on a terminal status; deciding when a
/// finished game makes way for a new one is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    current_player: Player,
    start_player: Player,
    win_length: usize,
    move_count: usize,
    history: Vec<Position>,
    computer: Option<ComputerOpponent>,
}

impl GameEngine {
    /// Creates an engine from a validated configuration.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self::with_parameters(*config.size(), *config.win_length(), *config.start_player())
    }

    /// Creates an engine from raw parameters.
    ///
    /// Parameter sanity is the caller's responsibility (see
    /// [`GameConfig`] for the enforced boundary); the engine performs no
    /// validation beyond staying in bounds. An out-of-range `win_length`
    /// is carried opaquely and merely makes winning impossible or
    /// trivial.
    #[instrument]
    pub fn with_parameters(size: usize, win_length: usize, start_player: Player) -> Self {
        Self {
            board: Board::new(size),
            status: GameStatus::InProgress,
            current_player: start_player,
            start_player,
            win_length,
            move_count: 0,
            history: Vec::new(),
            computer: None,
        }
    }

    /// Applies a move for the current player.
    ///
    /// An empty square takes the current player's mark, the move is
    /// recorded, and the turn flips. Selecting an occupied square is
    /// silently ignored. Either way the status is recomputed from the
    /// board afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for a position off the board;
    /// the engine state is untouched in that case.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn select(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds {
                position: pos,
                size: self.board.size(),
            });
        }

        if self.board.is_empty(pos) {
            self.board.set(pos, Square::Occupied(self.current_player))?;
            self.history.push(pos);
            self.move_count += 1;
            self.current_player = self.current_player.opponent();
            debug!(%pos, "Move applied");
        } else {
            debug!(%pos, "Square occupied, move ignored");
        }

        self.status = rules::evaluate(&self.board, self.win_length);
        self.assert_invariants();
        Ok(())
    }

    /// Applies a human move, then lets the computer reply.
    ///
    /// Calls [`select`](Self::select); if the computer is enabled and
    /// the turn passed to its mark, the computer plays immediately
    /// within the same call.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError::OutOfBounds`] from [`select`](Self::select).
    #[instrument(skip(self))]
    pub fn player_select(&mut self, pos: Position) -> Result<(), MoveError> {
        self.select(pos)?;

        if let Some(opponent) = self.computer {
            if self.current_player == opponent.computer() {
                self.play_computer_turn();
            }
        }
        Ok(())
    }

    /// Plays one computer move.
    ///
    /// No-op unless the game is in progress and the computer is
    /// enabled. The chosen square goes through [`select`](Self::select),
    /// so the turn flips and the status is recomputed as usual. On a
    /// full board no move is made.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let Some(opponent) = self.computer else {
            return;
        };

        if let Some(pos) = ai::choose_move(
            &self.board,
            self.win_length,
            opponent.computer(),
            opponent.human(),
        ) {
            // The position came from the board's own empty squares.
            self.select(pos).unwrap();
        }
    }

    /// Enables the computer opponent.
    ///
    /// No-op on a finished game. The computer always plays O and the
    /// human X; if it is O's turn right now, the computer moves
    /// immediately.
    #[instrument(skip(self))]
    pub fn enable_computer(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }

        self.computer = Some(ComputerOpponent {
            computer: Player::O,
            human: Player::X,
        });
        debug!("Computer opponent enabled");

        if self.current_player == Player::O {
            self.play_computer_turn();
        }
    }

    /// Whether the computer opponent is enabled.
    pub fn is_computer_enabled(&self) -> bool {
        self.computer.is_some()
    }

    /// Undoes the last move (or the last human/computer move pair).
    ///
    /// With the computer disabled, removes one move and hands the turn
    /// back. With the computer enabled, removes the human's move
    /// together with the computer's reply and makes it the human's turn
    /// again. The status is refreshed from the board afterwards.
    ///
    /// # Errors
    ///
    /// - [`UndoError::NothingToUndo`] if no move has been made;
    /// - [`UndoError::ComputerOpeningMove`] if the only move on the
    ///   board is the computer's opening move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.history.is_empty() {
            return Err(UndoError::NothingToUndo);
        }

        match self.computer {
            None => {
                self.current_player = self.current_player.opponent();
                self.pop_moves(1);
            }
            Some(opponent) => {
                if self.start_player == opponent.computer() && self.move_count == 1 {
                    return Err(UndoError::ComputerOpeningMove);
                }
                // When the game ended on the human's move the computer
                // never replied; the turn then rests with the computer
                // and there is no pair to unwind.
                if self.current_player == opponent.human() {
                    self.pop_moves(2);
                }
            }
        }

        self.status = rules::evaluate(&self.board, self.win_length);
        self.assert_invariants();
        Ok(())
    }

    /// Starts a fresh game with the construction-time parameters.
    ///
    /// Clears the board and history, restores the starting player, and
    /// disables the computer opponent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.status = GameStatus::InProgress;
        self.current_player = self.start_player;
        self.move_count = 0;
        self.history.clear();
        self.computer = None;
        debug!("Game reset");
    }

    /// The current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The player who starts (and restarts) the game.
    pub fn start_player(&self) -> Player {
        self.start_player
    }

    /// Number of consecutive marks required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Moves made so far, in chronological order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Reconstructs the history as attributed move events.
    ///
    /// Turns alternate strictly from the starting player, so the mark
    /// of every recorded move follows from its index.
    pub fn moves(&self) -> Vec<Move> {
        let mut player = self.start_player;
        self.history
            .iter()
            .map(|&pos| {
                let mov = Move::new(player, pos);
                player = player.opponent();
                mov
            })
            .collect()
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Removes up to `count` moves from the tail of the history.
    fn pop_moves(&mut self, count: usize) {
        for _ in 0..count {
            if let Some(pos) = self.history.pop() {
                // The recorded position was on the board when played.
                self.board.set(pos, Square::Empty).unwrap();
                self.move_count -= 1;
                debug!(%pos, "Move undone");
            }
        }
    }

    fn assert_invariants(&self) {
        crate::invariants::assert_invariants(self);
    }
}

impl Default for GameEngine {
    /// The classic game: 3x3 board, three in a row, X starts.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Error raised when a move cannot be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum UndoError {
    /// The move history is empty.
    #[display("no moves to undo")]
    NothingToUndo,
    /// The only move on the board is the computer's opening move.
    #[display("cannot undo the computer's opening move; reset to clear the board")]
    ComputerOpeningMove,
}
