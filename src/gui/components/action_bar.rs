// src/gui/components/action_bar.rs
//
// Copy controls, page-specific controls, spinner and status line.

use eframe::egui::{self, widgets::Spinner};
use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        if export.format != prev_fmt {
            logf!("UI: Copy format → {:?}", export.format);
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        let button_copy = ui.add_enabled(!app.dataset.is_empty(), egui::Button::new("Copy"));
        if button_copy.clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();
        page.draw_controls(ui, app);
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
        ui.label(app.status_text());
    });
}
