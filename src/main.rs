use eframe::egui;
use tabulon::app::TabulonApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tabulon – Excel Viewer & Analyzer",
        options,
        Box::new(|_cc| Ok(Box::new(TabulonApp::default()))),
    )
}
