// src/gui/components/mod.rs
//
// Widgets shared by pages, plus the inline messages used in place of
// missing data. Nothing here panics on empty input.

use eframe::egui::{self, Color32, RichText};

use crate::{error::GdpError, gui::app::App, present::NO_DATA, specs::sources::Source};

pub mod action_bar;
pub mod bar_chart;
pub mod data_table;
pub mod map_canvas;
pub mod source_panel;
pub mod tabs;

const WARN: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);
const ERROR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn no_data(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(NO_DATA).weak());
    });
}

pub fn inline_error(ui: &mut egui::Ui, msg: &str) {
    ui.label(RichText::new(msg).color(ERROR));
}

pub fn inline_warning(ui: &mut egui::Ui, msg: &str) {
    ui.label(RichText::new(msg).color(WARN));
}

/// Run-ending errors in red, per-source degradation in yellow.
pub fn issue(ui: &mut egui::Ui, e: &GdpError) {
    if e.is_fatal() {
        inline_error(ui, &e.to_string());
    } else {
        inline_warning(ui, &e.to_string());
    }
}

/// Draws the fatal error / loading / never-loaded message when there is no
/// report to show. Returns `true` when the page can draw data.
pub fn report_ready(ui: &mut egui::Ui, app: &App) -> bool {
    if let Some(err) = &app.last_error {
        inline_error(ui, err);
        if app.report.is_none() {
            no_data(ui);
            return false;
        }
        ui.label(RichText::new("Showing the previous result.").weak());
    }
    if app.report.is_none() {
        if app.running {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(20.0));
            });
        } else {
            no_data(ui);
        }
        return false;
    }
    true
}

/// Why `source` has nothing to show (missing/empty), then the empty message.
pub fn source_issue(ui: &mut egui::Ui, app: &App, source: Source) {
    let issue = app
        .report
        .as_ref()
        .and_then(|r| r.outcomes.iter().find(|o| o.source() == source))
        .and_then(|o| o.issue());
    if let Some(e) = issue {
        self::issue(ui, &e);
    }
    no_data(ui);
}
