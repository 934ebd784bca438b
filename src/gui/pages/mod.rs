// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, data::DataSet, gui::app::App};

pub mod compare;
pub mod continents;
pub mod map;
pub mod records;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Flat table behind the data grid and the Copy button.
    fn dataset(&self, app: &App) -> DataSet;

    /// Columns drawn left-aligned; the rest are numbers.
    fn text_columns(&self) -> &'static [usize] { &[0] }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Draw page-specific controls in the action bar.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Draw the page body.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
