// src/gui/components/bar_chart.rs
//
// Paints a BarChart as vertical bars: grouped side by side, or stacked.
// Hovering a segment shows its label and value.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{chart::BarChart, present::format_gdp};

const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x4E, 0x79, 0xA7),
    Color32::from_rgb(0xF2, 0x8E, 0x2B),
    Color32::from_rgb(0x59, 0xA1, 0x4F),
    Color32::from_rgb(0xE1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xB7, 0xB2),
    Color32::from_rgb(0xED, 0xC9, 0x48),
    Color32::from_rgb(0xB0, 0x7A, 0xA1),
    Color32::from_rgb(0x9C, 0x75, 0x5F),
];

const AXIS_W: f32 = 80.0;
const LABEL_H: f32 = 36.0;
const LEGEND_H: f32 = 18.0;

fn color(i: usize) -> Color32 {
    PALETTE[i % PALETTE.len()]
}

pub fn draw(ui: &mut egui::Ui, chart: &BarChart, height: f32) {
    if chart.is_empty() {
        super::no_data(ui);
        return;
    }

    ui.label(egui::RichText::new(&chart.title).strong());

    let size = Vec2::new(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let full = response.rect;
    let text_color = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();
    let font = FontId::proportional(11.0);

    let legend_h = if chart.series.is_empty() { 0.0 } else { LEGEND_H };
    let plot = Rect::from_min_max(
        Pos2::new(full.left() + AXIS_W, full.top() + legend_h),
        Pos2::new(full.right() - 8.0, full.bottom() - LABEL_H),
    );

    let max = chart.max_value();
    let y_of = |v: f64| -> f32 {
        if max > 0.0 { plot.bottom() - (v / max) as f32 * plot.height() } else { plot.bottom() }
    };

    // Axis + 4 grid lines
    for k in 0..=4 {
        let v = max * f64::from(k) / 4.0;
        let y = y_of(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], Stroke::new(0.5, weak));
        painter.text(Pos2::new(plot.left() - 6.0, y), Align2::RIGHT_CENTER, format_gdp(v), font.clone(), weak);
    }

    // Legend
    for (i, name) in chart.series.iter().enumerate() {
        let x = full.left() + AXIS_W + i as f32 * 130.0;
        let sw = Rect::from_min_size(Pos2::new(x, full.top() + 3.0), Vec2::splat(10.0));
        painter.rect_filled(sw, 2.0, color(i));
        painter.text(Pos2::new(x + 14.0, full.top() + 8.0), Align2::LEFT_CENTER, name, font.clone(), text_color);
    }

    let n = chart.bars.len() as f32;
    let slot = plot.width() / n;
    let bar_w = (slot * 0.8).max(2.0);
    let hover = response.hover_pos();
    let mut tip: Option<String> = None;

    for (bi, bar) in chart.bars.iter().enumerate() {
        let x0 = plot.left() + bi as f32 * slot + (slot - bar_w) / 2.0;

        if chart.stacked {
            let mut acc = 0.0;
            for (si, seg) in bar.segments.iter().enumerate() {
                let r = Rect::from_min_max(
                    Pos2::new(x0, y_of(acc + seg.value)),
                    Pos2::new(x0 + bar_w, y_of(acc)),
                );
                painter.rect_filled(r, 0.0, color(si));
                painter.rect_stroke(r, 0.0, Stroke::new(0.5, ui.visuals().panel_fill), egui::StrokeKind::Inside);
                if hover.is_some_and(|p| r.contains(p)) {
                    tip = Some(format!("{} / {}: {}", bar.label, seg.label, format_gdp(seg.value)));
                }
                acc += seg.value;
            }
        } else {
            let k = bar.segments.len().max(1) as f32;
            let seg_w = bar_w / k;
            for (si, seg) in bar.segments.iter().enumerate() {
                let x = x0 + si as f32 * seg_w;
                let r = Rect::from_min_max(Pos2::new(x, y_of(seg.value)), Pos2::new(x + seg_w, plot.bottom()));
                painter.rect_filled(r, 1.0, color(si));
                if hover.is_some_and(|p| r.contains(p)) {
                    tip = Some(format!("{} / {}: {}", bar.label, seg.label, format_gdp(seg.value)));
                }
            }
        }

        // Category label, truncated to the slot
        let max_chars = ((slot / 6.0) as usize).max(3);
        let label: String = if bar.label.chars().count() > max_chars {
            let mut s: String = bar.label.chars().take(max_chars.saturating_sub(1)).collect();
            s.push('…');
            s
        } else {
            bar.label.clone()
        };
        painter.text(
            Pos2::new(x0 + bar_w / 2.0, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            font.clone(),
            text_color,
        );
    }

    if let Some(t) = tip {
        response.on_hover_text_at_pointer(t);
    }
}
