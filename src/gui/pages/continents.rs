// src/gui/pages/continents.rs
use eframe::egui;

use crate::{
    chart::continent_chart,
    config::options::PageKind,
    data::{self, DataSet},
    gui::{app::App, components::{self, bar_chart, data_table}},
};

pub struct ContinentsPage;
pub static PAGE: ContinentsPage = ContinentsPage;

/// Named segments per stacked bar; smaller members fold into "Other".
const NAMED_MEMBERS: usize = 6;

impl super::Page for ContinentsPage {
    fn title(&self) -> &'static str { "Continents" }
    fn kind(&self) -> PageKind { PageKind::Continents }

    fn dataset(&self, app: &App) -> DataSet {
        app.report
            .as_ref()
            .and_then(|r| r.by_continent(app.state.options.view.source))
            .map(|v| data::continent_dataset(&v))
            .unwrap_or_default()
    }

    fn text_columns(&self) -> &'static [usize] { &[0, 3] }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[160.0, 90.0, 140.0, 220.0])
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !components::report_ready(ui, app) {
            return;
        }
        let source = app.state.options.view.source;
        let Some(view) = app.report.as_ref().and_then(|r| r.by_continent(source)) else {
            components::source_issue(ui, app, source);
            return;
        };

        let chart = continent_chart(&view, source, NAMED_MEMBERS);
        let chart_h = (ui.available_height() * 0.6).max(160.0);
        bar_chart::draw(ui, &chart, chart_h);
        ui.separator();
        data_table::draw(
            ui,
            "continents_table",
            &app.dataset,
            self.text_columns(),
            self.preferred_column_widths().unwrap_or(&[]),
        );
    }
}
