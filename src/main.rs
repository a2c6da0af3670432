use eframe::egui;
use studydesk::gui::StudydeskApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([860.0, 560.0])
            .with_title("Studydesk"),
        ..Default::default()
    };

    eframe::run_native("studydesk", options, Box::new(|cc| Ok(Box::new(StudydeskApp::new(cc)))))
}
