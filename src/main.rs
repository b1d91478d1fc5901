use eframe::egui;
use fukushu::gui::FukushuApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 740.0])
            .with_title("Fukushu"),
        ..Default::default()
    };

    eframe::run_native("fukushu", native_options, Box::new(|cc| Ok(Box::new(FukushuApp::new(cc)))))
}
