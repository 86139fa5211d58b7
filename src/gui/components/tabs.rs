// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. The table for the
// new tab is already cached in `app.tables`; auto refresh (if any) happens in
// `App::update` on the next pass.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();

        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            let title = if app.session.is_in_flight(page.kind) {
                format!("{} …", page.title)
            } else {
                s!(page.title)
            };

            if ui.selectable_label(selected, title).clicked() && !selected {
                let prev = app.current_kind();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, page.kind);
            }
        }
    });
}
