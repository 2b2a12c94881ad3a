//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use super::board_view::BoardView;
use super::canvas::{Canvas, StatusLine};
use super::theme::*;
use crate::controller::GameController;

/// Main Gomoku application
pub struct GomokuApp {
    controller: GameController<Canvas, StatusLine>,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            controller: GameController::new(Canvas::default(), StatusLine::default(), CELL_SIZE),
            board_view: BoardView::default(),
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the side panel with the status line and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.label(RichText::new("Five in a row, two players").size(11.0).color(TEXT_MUTED));
    }

    /// Render the one-line status message
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = if self.controller.state().is_over() {
                WIN_HIGHLIGHT
            } else {
                TEXT_PRIMARY
            };
            ui.label(
                RichText::new(self.controller.status().text())
                    .size(18.0)
                    .strong()
                    .color(color),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let restart = egui::Label::new(
                    RichText::new("🔄 Restart (N)").size(12.0).color(TEXT_PRIMARY),
                )
                .sense(egui::Sense::click());
                if ui.add(restart).clicked() {
                    self.controller.on_restart();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.controller.state().move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let hover = self
                .controller
                .input_enabled()
                .then(|| self.controller.state().current_turn());
            let board = self.controller.state().board();

            let clicked = self.board_view.show(
                ui,
                self.controller.surface(),
                hover,
                |pos| board.is_empty(pos),
            );

            if let Some(at) = clicked {
                self.controller.on_pointer_event(at.x, at.y);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.controller.on_restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
