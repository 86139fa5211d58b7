// src/gui/actions/refresh.rs
use std::thread;

use eframe::egui;

use crate::{
    config::options::ApiKey,
    gateway::ScrapeGraphClient,
    gui::{app::App, progress::GuiProgress},
    refresh::{self, RefreshError},
};

/// Start a refresh of the current tab on a worker thread. The result comes
/// back over `app.tx` and is applied in `App::update`.
pub fn refresh(app: &mut App, ui_ctx: &egui::Context) {
    let spec = app.current_page();
    let kind = spec.kind;

    let api_key = match ApiKey::parse(&app.api_key_text) {
        Ok(k) => k,
        Err(e) => {
            app.status(e.to_string());
            return;
        }
    };

    if !app.session.begin(kind) {
        logd!("Refresh: {:?} already in flight, ignoring", kind);
        app.status(format!("{} is already refreshing", spec.title));
        return;
    }

    let options = app.state.options.gateway.clone();
    let tx = app.tx.clone();
    let status = app.status.clone();
    let ctx = ui_ctx.clone();

    logf!("Refresh: Spawn dataset={:?} schema={}", kind, options.send_output_schema);

    let spawned = thread::Builder::new()
        .name(format!("refresh-{}", spec.slug))
        .spawn(move || {
            let mut progress = GuiProgress::new(status);
            let with_schema = options.send_output_schema;
            let result = match ScrapeGraphClient::new(api_key, options) {
                Ok(client) => refresh::refresh(&client, spec, with_schema, Some(&mut progress)),
                Err(e) => Err(RefreshError::from(e)),
            };
            // UI may be gone already
            let _ = tx.send((kind, result));
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        app.session.end(kind);
        loge!("Refresh: Could not start worker for {:?}: {}", kind, e);
        app.status(format!("Could not start refresh: {e}"));
    }
}
