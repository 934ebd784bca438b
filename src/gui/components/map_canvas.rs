// src/gui/components/map_canvas.rs
//
// Paints the map viewport: ocean fill, graticule with degree labels,
// marker dot and its popup label.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::map::MapView;

const OCEAN: Color32 = Color32::from_rgb(0x1F, 0x3A, 0x5A);
const GRID: Color32 = Color32::from_rgb(0x4A, 0x6A, 0x8A);
const MARKER: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, view: &MapView) {
    // Keep the 2:1 equirectangular aspect inside the available space.
    let avail = ui.available_size();
    let w = avail.x.min(avail.y * 2.0).max(120.0);
    let size = Vec2::new(w, w / 2.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 2.0, OCEAN);

    let b = view.bounds();
    let at = |lat: f64, lon: f64| -> Pos2 {
        let x = (lon - b.west) / (b.east - b.west);
        let y = (b.north - lat) / (b.north - b.south);
        Pos2::new(rect.left() + x as f32 * rect.width(), rect.top() + y as f32 * rect.height())
    };

    let font = FontId::proportional(10.0);
    let (lats, lons) = view.graticule();
    for lat in lats {
        let (l, r) = (at(lat, b.west), at(lat, b.east));
        painter.line_segment([l, r], Stroke::new(if lat == 0.0 { 1.2 } else { 0.5 }, GRID));
        painter.text(l + Vec2::new(3.0, -1.0), Align2::LEFT_BOTTOM, format!("{lat}°"), font.clone(), GRID);
    }
    for lon in lons {
        let (t, btm) = (at(b.north, lon), at(b.south, lon));
        painter.line_segment([t, btm], Stroke::new(if lon == 0.0 { 1.2 } else { 0.5 }, GRID));
        painter.text(btm + Vec2::new(2.0, -2.0), Align2::LEFT_BOTTOM, format!("{lon}°"), font.clone(), GRID);
    }

    for m in &view.markers {
        let Some((x, y)) = view.project(m.at, rect.width(), rect.height()) else { continue };
        let p = rect.min + Vec2::new(x, y);
        painter.circle_filled(p, 6.0, MARKER);
        painter.circle_stroke(p, 6.0, Stroke::new(1.5, Color32::WHITE));

        // Popup box, flipped to stay inside the canvas
        let text = format!("{} ({:.4}, {:.4})", m.popup, m.at.lat(), m.at.lon());
        let galley = painter.layout_no_wrap(text, FontId::proportional(12.0), Color32::BLACK);
        let pad = Vec2::new(6.0, 4.0);
        let box_size = galley.size() + pad * 2.0;
        let mut min = p + Vec2::new(10.0, -box_size.y - 10.0);
        if min.x + box_size.x > rect.right() { min.x = p.x - 10.0 - box_size.x; }
        if min.y < rect.top() { min.y = p.y + 10.0; }
        let popup = Rect::from_min_size(min, box_size);
        painter.rect_filled(popup, 4.0, Color32::from_rgb(0xF5, 0xF5, 0xF0));
        painter.rect_stroke(popup, 4.0, Stroke::new(1.0, Color32::DARK_GRAY), StrokeKind::Inside);
        painter.galley(min + pad, galley, Color32::BLACK);
    }

    painter.rect_stroke(rect, 2.0, Stroke::new(1.0, GRID), StrokeKind::Inside);
}
