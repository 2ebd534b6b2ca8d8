use eframe::egui;
use rusty_frame::app::RustyFrameApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Frame – Table Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyFrameApp::default()))),
    )
}
