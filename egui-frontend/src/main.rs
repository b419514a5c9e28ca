use eframe::egui;
use log::{error, info};

use smart_event_organizer_egui::config::AppConfig;
use smart_event_organizer_egui::SmartEventApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Smart Event Organizer");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return Err(eframe::Error::AppCreation(format!("Failed to load configuration: {:#}", e).into()));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.window.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    let app_name = config.window.title.clone();
    info!("Launching egui window");
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            match SmartEventApp::new(cc, config) {
                Ok(app) => {
                    info!("Successfully initialized Smart Event Organizer");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}
