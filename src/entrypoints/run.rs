use super::metadata::BuildInfo;
use crate::app::{RouteFinderApp, settings::Settings};

pub const APP_NAME: &str = "Jeep Route Finder";

/// Creates the app once eframe is ready, failing if no route dataset can be loaded
pub type AppCreator =
    Box<dyn FnOnce(&eframe::CreationContext<'_>) -> crate::data::Result<Box<dyn eframe::App>>>;

/// Setup and create the app
pub fn setup_app() -> AppCreator {
    let build_info = BuildInfo::current();
    build_info.log();
    let settings = Settings::from_cli();
    tracing::debug!("Settings: {settings:?}");

    Box::new(move |cc| {
        let app = RouteFinderApp::new(&settings, build_info.to_string(), cc)?;
        Ok(Box::new(app) as Box<dyn eframe::App>)
    })
}

/// Native entry point
#[cfg(not(target_arch = "wasm32"))]
pub async fn native_main() {
    super::profiling::setup_logging();

    let app_creator = setup_app();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc)?)),
    ) {
        tracing::error!("Application exited with an error: {err}");
    }
}
