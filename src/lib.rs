//! Super Tic-Tac-Toe engine - configurable N-by-N connect-K game logic.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns board, turn, and history state and
//!   applies moves, undo, and reset
//! - **Rules**: pure win/draw evaluation over rows, columns, and both
//!   diagonal orientations, for any board size and win length
//! - **Computer opponent**: one-ply heuristic scoring (win, block,
//!   adjacency combos), enabled per game
//! - **Config**: [`GameConfig`] validates board size and win length at
//!   the boundary
//!
//! Presentation, input collection, and process lifecycle are the
//! caller's job: construct the engine with validated parameters, drive
//! it with selections and undo, and read back the board and status to
//! render.
//!
//! # Example
//!
//! ```
//! use super_tictactoe::{GameConfig, GameEngine, GameStatus, Player, Position};
//!
//! let config = GameConfig::new(5, 4, Player::X).expect("valid parameters");
//! let mut game = GameEngine::new(config);
//!
//! game.player_select(Position::new(2, 2)).expect("on the board");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod config;
mod engine;
mod position;
mod types;

// Public rule evaluation and invariants
pub mod invariants;
pub mod rules;

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine
pub use engine::{ComputerOpponent, GameEngine, UndoError};

// Crate-level exports - Board geometry
pub use position::{Direction, Position};

// Crate-level exports - Domain types
pub use types::{Board, GameStatus, Player, Square};
