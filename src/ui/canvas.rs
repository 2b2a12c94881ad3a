//! Retained drawing surface for the immediate-mode GUI
//!
//! egui redraws everything each frame, while the controller issues drawing
//! commands only when something changes. `Canvas` records those commands
//! so `BoardView` can replay them every frame.

use crate::controller::{StatusSink, Surface};
use crate::rules::WinningLine;
use crate::{Pos, Stone};

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Grid { rows: usize, cols: usize, cell_size: f32 },
    Stone { pos: Pos, stone: Stone },
    WinningLine(WinningLine),
}

#[derive(Debug, Default)]
pub struct Canvas {
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_grid_lines(&mut self, rows: usize, cols: usize, cell_size: f32) {
        self.commands.push(DrawCommand::Grid { rows, cols, cell_size });
    }

    fn draw_stone(&mut self, pos: Pos, stone: Stone) {
        self.commands.push(DrawCommand::Stone { pos, stone });
    }

    fn highlight_line(&mut self, line: &WinningLine) {
        self.commands.push(DrawCommand::WinningLine(*line));
    }
}

/// Text shown in the status card
#[derive(Debug, Default)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusSink for StatusLine {
    fn set_status(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
