//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It is a thin
//! adapter: all decisions are made by [`crate::controller::GameController`].

mod app;
mod board_view;
mod canvas;
mod theme;

pub use app::GomokuApp;
pub use canvas::{Canvas, DrawCommand, StatusLine};
