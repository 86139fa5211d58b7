// src/gui/components/data_table.rs
//
// Draws the live table for the current tab. Purely a view over `app.tables`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    datasets::FieldKind,
    gui::{app::App, table_model::TableData},
};

fn width_for(kind: FieldKind) -> f32 {
    match kind {
        FieldKind::Count => 90.0,
        FieldKind::Text => 160.0,
        FieldKind::LongText => 360.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let spec = app.current_page();
    let fallback;
    let table = match app.tables.get(&spec.kind) {
        Some(t) => t,
        None => {
            fallback = TableData::for_schema(&spec.schema);
            &fallback
        }
    };

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, spec.slug, table));
}

fn inner_table(ui: &mut egui::Ui, salt: &str, table: &TableData) {
    let mut builder = TableBuilder::new(ui)
        .id_salt(("table_state", salt))
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));

    let last = table.ncols().saturating_sub(1);
    for (ci, kind) in table.kinds.iter().enumerate() {
        let col = if ci == last {
            Column::remainder().at_least(width_for(*kind) * 0.5)
        } else {
            Column::initial(width_for(*kind)).at_least(40.0)
        };
        builder = builder.column(col.clip(true));
    }

    builder
        .header(24.0, |mut header| {
            for (ci, label) in table.headers.iter().enumerate() {
                let centered = table.kinds.get(ci) == Some(&FieldKind::Count);
                header.col(|ui| {
                    let text = RichText::new(label).strong();
                    if centered {
                        ui.centered_and_justified(|ui| ui.label(text));
                    } else {
                        ui.label(text);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let Some(cells) = table.rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    let centered = table.kinds.get(ci) == Some(&FieldKind::Count);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if centered {
                            ui.centered_and_justified(|ui| ui.label(cell));
                        } else {
                            ui.label(cell).on_hover_text(cell);
                        }
                    });
                }
            });
        });
}
