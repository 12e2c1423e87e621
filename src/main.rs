// Festival Timetable Application
// Main entry point

use festival_timetable::ui_egui::FestivalApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Festival Timetable");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Festival Timetable")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Festival Timetable",
        options,
        Box::new(|cc| Ok(Box::new(FestivalApp::new(cc)))),
    )
}
