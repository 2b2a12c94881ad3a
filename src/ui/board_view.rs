//! Board rendering for the Gomoku GUI

use crate::rules::WinningLine;
use crate::{Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::canvas::{Canvas, DrawCommand};
use super::theme::*;

/// Board view replays the canvas and reports clicks
pub struct BoardView {
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the click position, if any, relative to
    /// the board's top-left corner.
    ///
    /// `hover` is the stone to preview under the pointer, or `None` when
    /// input is disabled. `is_free` tells whether a cell can take it.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        canvas: &Canvas,
        hover: Option<Stone>,
        is_free: impl Fn(Pos) -> bool,
    ) -> Option<Vec2> {
        let extent = BOARD_SIZE as f32 * self.cell_size;
        let (response, painter) = ui.allocate_painter(Vec2::splat(extent), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        for command in canvas.commands() {
            match command {
                DrawCommand::Grid { rows, cols, cell_size } => {
                    self.draw_grid(&painter, *rows, *cols, *cell_size)
                }
                DrawCommand::Stone { pos, stone } => self.draw_stone(&painter, *pos, *stone),
                DrawCommand::WinningLine(line) => self.draw_winning_line(&painter, line),
            }
        }

        let pointer = response.hover_pos()?;
        let relative = pointer - self.board_rect.min;

        if let Some(stone) = hover {
            let pos = crate::controller::pointer_to_cell(relative.x, relative.y, self.cell_size);
            if is_free(pos) {
                self.draw_hover_preview(&painter, pos, stone);
            }
        }

        response.clicked().then_some(relative)
    }

    /// Draw the cell grid, border included
    fn draw_grid(&self, painter: &Painter, rows: usize, cols: usize, cell_size: f32) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = cols as f32 * cell_size;
        let height = rows as f32 * cell_size;

        for row in 0..=rows {
            let y = row as f32 * cell_size;
            let start = self.board_rect.min + Vec2::new(0.0, y);
            let end = self.board_rect.min + Vec2::new(width, y);
            painter.line_segment([start, end], stroke);
        }

        for col in 0..=cols {
            let x = col as f32 * cell_size;
            let start = self.board_rect.min + Vec2::new(x, 0.0);
            let end = self.board_rect.min + Vec2::new(x, height);
            painter.line_segment([start, end], stroke);
        }
    }

    fn stone_radius(&self) -> f32 {
        self.cell_size / 2.0 - STONE_MARGIN
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_center(pos);
        let radius = self.stone_radius();
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &WinningLine) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.cells.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        for &pos in &line.cells {
            painter.circle_stroke(self.cell_center(pos), self.stone_radius() + 3.0, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => hover_black(),
            Stone::White => hover_white(),
            Stone::Empty => return,
        };
        painter.circle_filled(self.cell_center(pos), self.stone_radius(), color);
    }

    /// Screen position of a cell's centre
    fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
