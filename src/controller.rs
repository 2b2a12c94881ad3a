//! Event translation between the outside world and [`GameState`]
//!
//! The controller owns no game rules. It turns pointer positions into
//! cells, forwards them to the game, and turns the results into drawing
//! and status commands for whatever surface is attached.

use tracing::{debug, info};

use crate::board::{Pos, Stone, BOARD_SIZE};
use crate::game::{GameState, Outcome, Phase};
use crate::rules::WinningLine;

/// Something that can draw the board
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    /// Draw the cell grid
    fn draw_grid_lines(&mut self, rows: usize, cols: usize, cell_size: f32);

    /// Draw a filled stone centred in the cell
    fn draw_stone(&mut self, pos: Pos, stone: Stone);

    /// Mark the five that ended the game
    fn highlight_line(&mut self, _line: &WinningLine) {}
}

/// One-line message area. Each call replaces the previous text.
pub trait StatusSink {
    fn set_status(&mut self, text: &str);
}

/// Message shown for a game phase
pub fn status_text(phase: &Phase) -> String {
    match phase {
        Phase::InProgress(stone) => format!("{stone} to move"),
        Phase::Won(stone) => format!("{stone} wins!"),
    }
}

/// Map a pointer position on the surface to the cell under it.
///
/// The position is clamped to the surface extent (`BOARD_SIZE * cell_size`
/// on each axis) first, so every input yields a cell on the board.
/// `x` selects the column and `y` the row.
pub fn pointer_to_cell(x: f32, y: f32, cell_size: f32) -> Pos {
    let last = (BOARD_SIZE - 1) as f32;
    let to_index = |v: f32| -> u8 {
        let cell = (v / cell_size).floor();
        // NaN survives the clamp and casts to 0
        cell.clamp(0.0, last) as u8
    };
    Pos::new(to_index(y), to_index(x))
}

/// Drives one game session against a surface and a status sink
pub struct GameController<R, S> {
    state: GameState,
    surface: R,
    status: S,
    cell_size: f32,
    input_enabled: bool,
}

impl<R: Surface, S: StatusSink> GameController<R, S> {
    /// Start a session: empty grid drawn, Black prompted to move.
    pub fn new(surface: R, status: S, cell_size: f32) -> Self {
        let mut controller = Self {
            state: GameState::new(),
            surface,
            status,
            cell_size,
            input_enabled: true,
        };
        controller.draw_fresh_board();
        controller
    }

    /// Handle a click at `(x, y)` in surface coordinates.
    ///
    /// Clicks on occupied cells, and every click after a win, do nothing.
    pub fn on_pointer_event(&mut self, x: f32, y: f32) {
        if !self.input_enabled {
            return;
        }

        let pos = pointer_to_cell(x, y, self.cell_size);
        let placement = match self.state.try_place(pos) {
            Ok(placement) => placement,
            Err(_) => return,
        };

        self.surface.draw_stone(placement.pos, placement.stone);

        match placement.outcome {
            Outcome::Win(line) => {
                self.surface.highlight_line(&line);
                self.input_enabled = false;
                info!(winner = %line.color, "Input disabled until restart");
            }
            Outcome::Continue { next } => {
                debug!(%next, "Turn passed");
            }
        }

        self.status.set_status(&status_text(&self.state.phase()));
    }

    /// Start over: board cleared, grid redrawn, Black to move, input re-enabled.
    pub fn on_restart(&mut self) {
        self.state.reset();
        self.draw_fresh_board();
        self.input_enabled = true;
    }

    fn draw_fresh_board(&mut self) {
        self.surface.clear();
        self.surface
            .draw_grid_lines(BOARD_SIZE, BOARD_SIZE, self.cell_size);
        self.status.set_status(&status_text(&self.state.phase()));
    }

    /// Whether clicks are currently forwarded to the game
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn status(&self) -> &S {
        &self.status
    }
}
