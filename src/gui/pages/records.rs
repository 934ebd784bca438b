// src/gui/pages/records.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{self, DataSet},
    gui::{app::App, components::{self, data_table}},
    present,
};

pub struct RecordsPage;
pub static PAGE: RecordsPage = RecordsPage;

const CONTINENT_COL: usize = 1;

impl super::Page for RecordsPage {
    fn title(&self) -> &'static str { "Records" }
    fn kind(&self) -> PageKind { PageKind::Records }

    fn dataset(&self, app: &App) -> DataSet {
        let source = app.state.options.view.source;
        let Some(set) = app.report.as_ref().and_then(|r| r.records(source)) else {
            return DataSet::default();
        };
        let mut ds = data::records_dataset(set);
        if !app.state.gui.records_show_continent {
            ds.headers.remove(CONTINENT_COL);
            for row in &mut ds.rows {
                row.remove(CONTINENT_COL);
            }
        }
        ds
    }

    fn text_columns(&self) -> &'static [usize] { &[0, 1] }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[240.0, 140.0, 140.0, 60.0])
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        if ui.checkbox(&mut app.state.gui.records_show_continent, "Continent column").changed() {
            logf!("UI: Continent column → {}", app.state.gui.records_show_continent);
            app.rebuild_view();
        }
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let source = app.state.options.view.source;
        if !components::report_ready(ui, app) {
            return;
        }
        if let Some(set) = app.report.as_ref().and_then(|r| r.records(source)) {
            ui.label(format!(
                "{}: {} countries, total {} US$ million, {} rows skipped",
                source,
                set.len(),
                present::format_gdp(set.total()),
                set.dropped
            ));
        }
        if app.dataset.is_empty() {
            components::source_issue(ui, app, source);
            return;
        }

        // Year and GDP sit at 2,3 with the continent column, 1,2 without.
        let text_cols: &[usize] = if app.state.gui.records_show_continent { &[0, 1] } else { &[0] };
        let widths: &[f32] = if app.state.gui.records_show_continent {
            self.preferred_column_widths().unwrap_or(&[])
        } else {
            &[240.0, 140.0, 60.0]
        };
        data_table::draw(ui, "records_table", &app.dataset, text_cols, widths);
    }
}
