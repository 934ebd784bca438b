// src/gui/components/data_table.rs
//
// Draws a flat DataSet. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::DataSet, present::format_gdp};

pub fn draw(ui: &mut egui::Ui, id: &str, ds: &DataSet, text_cols: &[usize], widths: &[f32]) {
    let cols = ds.header_count();
    if cols == 0 || ds.is_empty() {
        super::no_data(ui);
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .id_salt(id);
    for ci in 0..cols {
        let w = widths.get(ci).copied().unwrap_or(120.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let is_text = |ci: usize| text_cols.contains(&ci);
    let groupable = |ci: usize| ds.headers.get(ci).is_some_and(|h| h != "Year");

    table
        .header(24.0, |mut header| {
            for (ci, h) in ds.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = RichText::new(h).strong();
                    if is_text(ci) {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                    } else {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.row_count(), |mut row| {
                let Some(data) = ds.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if is_text(ci) {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            // Whole numbers are plain in the data, grouped on screen.
                            let shown = match cell.parse::<f64>() {
                                Ok(v) if groupable(ci) && !cell.contains('.') => format_gdp(v),
                                _ => s!(cell),
                            };
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(shown); });
                        }
                    });
                }
            });
        });
}
