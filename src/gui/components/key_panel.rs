// src/gui/components/key_panel.rs
//
// Left panel: API key, output directory and refresh toggles. Refresh buttons
// elsewhere stay disabled while the key field is empty.

use eframe::egui;

use crate::gui::app::App;

const KEY_URL: &str = "https://dashboard.scrapegraphai.com";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Settings");
    ui.separator();

    ui.label("ScrapeGraph API key");
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.api_key_text)
            .password(true)
            .hint_text("sgai-…"),
    );
    if resp.lost_focus() {
        logd!("UI: API key field edited (present={})", app.has_api_key());
    }
    if !app.has_api_key() {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            "Please enter your API key to fetch data.",
        );
    }
    ui.hyperlink_to("Get an API key", KEY_URL);

    ui.add_space(8.0);
    ui.label("Output directory");
    if ui
        .add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace))
        .changed()
    {
        app.state.options.export.set_dir(&app.out_dir_text);
        logd!("UI: out_dir → {}", app.state.options.export.out_dir().display());
    }

    ui.add_space(8.0);
    let gui = &mut app.state.gui;
    if ui
        .checkbox(&mut gui.auto_refresh, "Fetch empty tabs automatically")
        .changed()
    {
        logf!("UI: auto_refresh → {}", gui.auto_refresh);
    }

    let gateway = &mut app.state.options.gateway;
    if ui
        .checkbox(&mut gateway.send_output_schema, "Send output schema")
        .on_hover_text("Ask the API to return rows in the dashboard's column layout")
        .changed()
    {
        logf!("UI: send_output_schema → {}", gateway.send_output_schema);
    }
}
