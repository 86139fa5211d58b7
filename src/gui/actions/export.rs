// src/gui/actions/export.rs
use crate::{config::options::ExportFormat, file, gui::app::App};

/// Write the current tab to `<out_dir>/<slug>.<ext>`.
pub fn export(app: &mut App, format: ExportFormat) {
    // pick up the text field before borrowing the records
    app.state.options.export.set_dir(&app.out_dir_text);

    let spec = app.current_page();
    let dir = app.state.options.export.out_dir().to_path_buf();

    let res = {
        let Some(set) = super::current_records(app) else {
            app.status("Nothing to export");
            logd!("Export: Clicked, but there's nothing to export");
            return;
        };
        logf!(
            "Export: Begin dataset={:?}, rows={}, format={:?}, dir={}",
            spec.kind,
            set.len(),
            format,
            dir.display()
        );
        file::write_export(&dir, spec, set, format)
    };

    match res {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
