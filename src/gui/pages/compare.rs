// src/gui/pages/compare.rs
use eframe::egui;

use crate::{
    chart::comparison_chart,
    config::options::PageKind,
    data::{self, DataSet},
    gui::{app::App, components::{self, bar_chart, data_table}},
};

pub struct ComparePage;
pub static PAGE: ComparePage = ComparePage;

impl super::Page for ComparePage {
    fn title(&self) -> &'static str { "Compare" }
    fn kind(&self) -> PageKind { PageKind::Compare }

    fn dataset(&self, app: &App) -> DataSet {
        app.report
            .as_ref()
            .map(|r| data::joined_dataset(&r.joined()))
            .unwrap_or_default()
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[240.0, 120.0, 120.0, 120.0])
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !components::report_ready(ui, app) {
            return;
        }
        let Some(report) = app.report.as_ref() else { return };

        let view = report.joined();
        let opts = &app.state.options.view;
        let chart = comparison_chart(&view, opts.source, opts.top_n);
        if chart.is_empty() {
            components::source_issue(ui, app, opts.source);
            return;
        }

        let chart_h = (ui.available_height() * 0.6).max(160.0);
        bar_chart::draw(ui, &chart, chart_h);
        ui.separator();
        data_table::draw(
            ui,
            "compare_table",
            &app.dataset,
            self.text_columns(),
            self.preferred_column_widths().unwrap_or(&[]),
        );
    }
}
