//! Gomoku GUI
//!
//! Two players take turns at one board. Set `RUST_LOG` to change log output.

use gomoku::ui::GomokuApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "gomoku=info".into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 660.0])
            .with_min_inner_size([860.0, 640.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    tracing::info!("Starting Gomoku");
    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
}
