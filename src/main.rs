mod app;
mod classify;
mod config;
mod error;
mod state;
mod ui;
mod upload;

use app::FrutaCheckApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();
    log::info!("Classification endpoint: {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fruta Check – Detección de Calidad en Frutas",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the preview (png/jpg/etc.)
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(FrutaCheckApp::new(config)))
        }),
    )
}
