//! Game rules for Gomoku
//!
//! Free-style five-in-a-row: any line of five or more stones of one color
//! through the last move wins. There are no captures or forbidden moves.

pub mod win;

pub use win::{find_five_line_at_pos, Direction, WinningLine, WIN_LENGTH};
