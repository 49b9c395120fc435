// Personal Calendar Application
// Main entry point

use personal_calendar::models::settings::DEFAULT_APP_TITLE;
use personal_calendar::ui_egui::CalendarApp;

const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Personal Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(DEFAULT_APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        DEFAULT_APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
}
