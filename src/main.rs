//! Mancala AI Engine GUI
//!
//! A graphical interface for playing Kalah against the AI or another player.

use mancala::ui::MancalaApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 650.0])
            .with_min_inner_size([900.0, 520.0])
            .with_title("Mancala"),
        ..Default::default()
    };

    eframe::run_native(
        "Mancala",
        options,
        Box::new(|cc| Ok(Box::new(MancalaApp::new(cc)))),
    )
}
