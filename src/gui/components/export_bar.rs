// src/gui/components/export_bar.rs
//
// Per-tab actions (Refresh / Copy / Export CSV / Export JSON) plus the status,
// warning and error lines for the current dataset.

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let spec = app.current_page();
    let kind = spec.kind;
    let running = app.session.is_in_flight(kind);
    let has_rows = app.session.records(kind).is_some_and(|r| !r.is_empty());

    ui.horizontal(|ui| {
        let can_refresh = app.has_api_key() && !running;
        let refresh = ui
            .add_enabled(can_refresh, egui::Button::new(format!("Refresh {}", spec.title)))
            .on_disabled_hover_text(if running {
                "A refresh is already running"
            } else {
                "Enter an API key first"
            });
        if refresh.clicked() {
            actions::refresh(app, ui.ctx());
        }
        if running {
            ui.spinner();
        }

        ui.separator();

        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export CSV")).clicked() {
            actions::export(app, ExportFormat::Csv);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export JSON")).clicked() {
            actions::export(app, ExportFormat::Json);
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });

    if let Some(snap) = app.session.get(kind) {
        if let Some(err) = &snap.error {
            ui.colored_label(ui.visuals().error_fg_color, format!("Error: {err}"));
        }
        if let Some(warn) = &snap.warning {
            ui.colored_label(ui.visuals().warn_fg_color, warn);
        }
        if !snap.fresh && !snap.records().is_empty() {
            ui.weak("Showing cached rows from the last session. Refresh to update.");
        }
    } else if !running {
        ui.label("No data yet. Press Refresh to fetch it.");
    }
}
