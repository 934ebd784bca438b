// src/gui/pages/map.rs
use eframe::egui;

use crate::{
    config::{consts::MAX_ZOOM, options::PageKind},
    data::DataSet,
    gui::{app::App, components::{self, map_canvas}},
    map::{MapView, LAT_RANGE, LON_RANGE},
};

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

impl super::Page for MapPage {
    fn title(&self) -> &'static str { "Map" }
    fn kind(&self) -> PageKind { PageKind::Map }

    fn dataset(&self, app: &App) -> DataSet {
        let m = &app.state.options.map;
        let Ok(view) = MapView::single(m.lat, m.lon, m.zoom) else {
            return DataSet::default();
        };
        DataSet {
            headers: vec![s!("Label"), s!("Latitude"), s!("Longitude")],
            rows: view
                .markers
                .iter()
                .map(|mk| vec![mk.popup.clone(), mk.at.lat().to_string(), mk.at.lon().to_string()])
                .collect(),
        }
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        let m = &mut app.state.options.map;
        let before = m.clone();

        ui.label("Lat:");
        ui.add(egui::DragValue::new(&mut m.lat).range(LAT_RANGE.0..=LAT_RANGE.1).speed(0.1).max_decimals(4));
        ui.label("Lon:");
        ui.add(egui::DragValue::new(&mut m.lon).range(LON_RANGE.0..=LON_RANGE.1).speed(0.1).max_decimals(4));
        ui.label("Zoom:");
        ui.add(egui::Slider::new(&mut m.zoom, 0..=MAX_ZOOM));

        if *m != before {
            logd!("UI: Marker → {:.4}, {:.4} zoom {}", m.lat, m.lon, m.zoom);
            app.rebuild_view();
        }
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let m = &app.state.options.map;
        match MapView::single(m.lat, m.lon, m.zoom) {
            Ok(view) => map_canvas::draw(ui, &view),
            Err(e) => components::inline_error(ui, &e.to_string()),
        }
    }
}
