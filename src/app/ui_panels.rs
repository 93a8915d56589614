//! UI panels for the application
//!
//! This module provides the input bar, the route output, the route list, notices and help.

use crate::app::state::AppState;
use crate::data::{CODE_ARROW, Color, RenderedStop, RouteBlock, STOP_SEPARATOR};
use egui::{Color32, RichText, Ui};

/// Render the input field and the "Find Routes" button
pub fn query_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input)
                .hint_text("Enter Jeep Codes separated by comma")
                .desired_width(320.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("🔍 Find Routes").clicked() || submitted {
            state.find_routes();
        }

        if ui.button("🗑 Clear").clicked() {
            state.clear();
        }
    });
}

/// Render every route of the last search, one block per line
pub fn output_panel(ui: &mut Ui, state: &AppState) {
    if state.result.blocks().next().is_none() {
        ui.label(RichText::new("No routes to show yet").italics().weak());
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for block in state.result.blocks() {
                route_block(ui, block);
                ui.add_space(6.0);
            }
        });
}

/// Render one route: its code, then its stops with shared ones highlighted
fn route_block(ui: &mut Ui, block: &RouteBlock) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(
            RichText::new(block.code.as_str())
                .monospace()
                .strong()
                .color(ui.visuals().strong_text_color()),
        );
        ui.label(CODE_ARROW);

        for (i, stop) in block.stops.iter().enumerate() {
            if i > 0 {
                ui.label(RichText::new(STOP_SEPARATOR).weak());
            }
            ui.label(stop_text(stop));
        }
    });
}

fn stop_text(stop: &RenderedStop) -> RichText {
    match stop.highlight {
        Some(color) => RichText::new(&stop.name)
            .color(color32(color))
            .strong()
            .italics(),
        None => RichText::new(&stop.name),
    }
}

pub fn color32(color: Color) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Render the list of known route codes; clicking one adds it to the query
pub fn routes_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Routes");
    ui.label(RichText::new(state.stats.format_dataset()).small().weak());
    ui.separator();

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (code, stops) in state.dataset.routes() {
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new(code).monospace())
                        .on_hover_text(stops.join(STOP_SEPARATOR))
                        .clicked()
                    {
                        clicked = Some(code.to_string());
                    }
                    ui.label(RichText::new(format!("{} stops", stops.len())).small());
                });
            }
        });

    if let Some(code) = clicked {
        state.append_code(&code);
    }
}

/// Render a one-line summary of the last search
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if state.stats.last_query_time_ms > 0.0 {
            ui.label(format!(
                "{} routes, {} shared stops",
                state.stats.last_query_routes, state.stats.last_query_shared_stops
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{:.2} ms", state.stats.last_query_time_ms)).weak(),
                );
            });
        } else {
            ui.label(RichText::new("No query data yet").italics().weak());
        }
    });
}

/// Show the oldest pending notice as a modal until the user dismisses it
pub fn notice_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.current_notice().map(str::to_string) else {
        return;
    };

    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("code_notice")).show(ctx, |ui| {
        ui.label(RichText::new("⚠").size(24.0).color(ui.visuals().warn_fg_color));
        ui.label(RichText::new(&notice).strong());
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    if dismissed || response.should_close() {
        state.dismiss_notice();
    }
}

/// Render the help overlay
pub fn help_overlay(ctx: &egui::Context, show: &mut bool, version: &str) {
    egui::Window::new("Help")
        .open(show)
        .collapsible(false)
        .resizable(true)
        .default_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Jeep Route Finder");
            ui.label(RichText::new(format!("Version {version}")).small().weak());
            ui.separator();

            ui.label("Find the stops shared between jeepney routes.");
            ui.add_space(8.0);

            ui.label(RichText::new("🔍 Searching").strong());
            ui.label("• Type route codes separated by commas, e.g. 04L, 17B");
            ui.label("• A code is two digits and an uppercase letter");
            ui.label("• Press Enter or click 'Find Routes'");
            ui.label("• Click a code in the Routes panel to add it");
            ui.add_space(8.0);

            ui.label(RichText::new("🎨 Highlights").strong());
            ui.horizontal_wrapped(|ui| {
                ui.label("• Stops served by another route of the search are shown");
                ui.label(
                    RichText::new("bold and colored")
                        .color(color32(Color::Red))
                        .strong()
                        .italics(),
                );
            });
            ui.label("• Each pair of routes has its own color");
            ui.label("• Colors repeat once more than 6 pairs are searched");
            ui.add_space(8.0);

            ui.separator();
            ui.label(
                RichText::new("Press F1 to toggle this help")
                    .small()
                    .italics(),
            );
        });
}
