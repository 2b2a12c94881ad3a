//! Two-player Gomoku (free-style five in a row) on a 15x15 board
//!
//! Black moves first and the players alternate. A player wins the moment
//! five or more of their stones line up horizontally, vertically or
//! diagonally through the stone just played.
//!
//! # Architecture
//!
//! - [`board`]: Grid occupancy, stones and positions
//! - [`rules`]: Five-in-a-row detection around the last move
//! - [`game`]: Turn order, placement validation and game over
//! - [`controller`]: Turns pointer and restart events into game calls and
//!   drawing/status commands
//! - [`ui`]: egui front end implementing the drawing and status traits
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, Pos, Stone};
//!
//! let mut game = GameState::new();
//! for col in 0..4 {
//!     game.try_place(Pos::new(7, col)).unwrap(); // Black
//!     game.try_place(Pos::new(0, col)).unwrap(); // White
//! }
//! let placement = game.try_place(Pos::new(7, 4)).unwrap();
//! assert_eq!(placement.winner(), Some(Stone::Black));
//! assert!(game.try_place(Pos::new(9, 9)).is_err());
//! ```

pub mod board;
pub mod controller;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use controller::{GameController, StatusSink, Surface};
pub use game::{GameState, Outcome, Phase, Placement, Rejection};
