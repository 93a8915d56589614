//! Application module
//!
//! This module provides the main application structure with a single screen:
//! - Input bar with the route codes and a "Find Routes" button
//! - Output area listing every route with its shared stops highlighted
//! - Toggleable side panel listing every known route code
//! - Modal notices for codes that don't exist

pub(crate) mod settings;
mod state;
mod ui_panels;

use crate::app::settings::Settings;
use crate::app::state::AppState;
use eframe::egui;

/// Main application structure
pub struct RouteFinderApp {
    /// Application state (dataset, query, result, etc.)
    state: AppState,

    /// Show help overlay
    show_help: bool,

    /// Build version shown in the help overlay
    version: String,
}

impl RouteFinderApp {
    pub fn new(
        settings: &Settings,
        version: String,
        _cc: &eframe::CreationContext<'_>,
    ) -> crate::data::Result<Self> {
        let state = AppState::new(settings)?;

        tracing::info!("Initialized with {}", state.stats.format_dataset());

        Ok(Self {
            state,
            show_help: false,
            version,
        })
    }
}

impl eframe::App for RouteFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("RouteFinderApp::update");

        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.show_help = !self.show_help;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🚌 Jeep Route Finder");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("❓").on_hover_text("Help (F1)").clicked() {
                        self.show_help = !self.show_help;
                    }
                    ui.toggle_value(&mut self.state.ui_settings.show_routes, "Routes");
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui_panels::status_bar(ui, &self.state);
        });

        if self.state.ui_settings.show_routes {
            egui::SidePanel::right("routes_panel")
                .resizable(true)
                .default_width(200.0)
                .show(ctx, |ui| {
                    ui_panels::routes_panel(ui, &mut self.state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui_panels::query_panel(ui, &mut self.state);
            ui.separator();
            ui_panels::output_panel(ui, &self.state);
        });

        ui_panels::help_overlay(ctx, &mut self.show_help, &self.version);
        ui_panels::notice_modal(ctx, &mut self.state);
    }
}
