// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

/// Current tab as CSV on the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let spec = app.current_page();

    let txt = {
        let Some(set) = super::current_records(app) else {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        };
        logf!("Copy: dataset={:?}, rows={}", spec.kind, set.len());
        file::to_export_string(spec, set, ExportFormat::Csv)
    };

    match txt {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
