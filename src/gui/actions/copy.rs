// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.dataset.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let ds = &app.dataset;
    logf!(
        "Copy: page={:?}, rows={}, headers={}, format={:?}",
        app.current_page_kind(),
        ds.row_count(),
        ds.header_count(),
        export.format
    );

    let txt = csv::to_export_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", ds.row_count()));
}
