use eframe::egui;

use hexarenaviewer::ui::ArenaViewerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_resizable(true),
        ..Default::default()
    };
    eframe::run_native(
        "Hex Arena Viewer",
        options,
        Box::new(|cc| Box::new(ArenaViewerApp::new(cc))),
    )
}
