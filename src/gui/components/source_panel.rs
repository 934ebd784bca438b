// src/gui/components/source_panel.rs
//
// Left panel: view source, top N, page address + marker, refresh buttons
// and the per-source outcome of the last run.

use eframe::egui::{self, RichText};

use crate::{
    config::consts::MAX_TOP_N,
    gui::app::App,
    scrape::SourceOutcome,
    specs::sources::Source,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Source");

    let mut changed = false;
    for s in Source::ALL {
        let selected = app.state.options.view.source == s;
        if ui.selectable_label(selected, s.label()).clicked() && !selected {
            logf!("UI: Source → {}", s);
            app.state.options.view.source = s;
            changed = true;
        }
    }

    ui.add_space(6.0);
    ui.label("Top countries:");
    let mut top = app.state.options.view.top_n;
    if ui.add(egui::Slider::new(&mut top, 1..=MAX_TOP_N)).changed() {
        app.state.options.view.set_top_n(top);
        changed = true;
    }

    if changed {
        app.rebuild_view();
    }

    ui.separator();
    ui.heading("Page");

    let scrape = &mut app.state.options.scrape;
    ui.label("URL:");
    ui.add(egui::TextEdit::singleline(&mut scrape.url).desired_width(f32::INFINITY));
    ui.label("Table selector:");
    ui.add(egui::TextEdit::singleline(&mut scrape.marker).desired_width(f32::INFINITY));

    ui.horizontal(|ui| {
        let idle = !app.running;
        if ui
            .add_enabled(idle, egui::Button::new("Refresh"))
            .on_hover_text("Re-read the tables; the page is reused while cached")
            .clicked()
        {
            logf!("UI: Refresh");
            app.request_refresh(false);
        }
        if ui
            .add_enabled(idle, egui::Button::new("Re-fetch"))
            .on_hover_text("Drop the cached page and download it again")
            .clicked()
        {
            logf!("UI: Re-fetch");
            app.request_refresh(true);
        }
    });

    if let Err(e) = &app.fetcher {
        super::inline_error(ui, &format!("HTTP client unavailable: {e}"));
    }

    let Some(report) = &app.report else { return };

    ui.separator();
    ui.label(RichText::new(format!("Fetched {}", report.fetched_at.format("%Y-%m-%d %H:%M UTC"))).weak());

    for o in &report.outcomes {
        match o {
            SourceOutcome::Loaded(r) => {
                ui.label(format!("✔ {}: {} countries", r.source, r.len()));
            }
            SourceOutcome::Missing(_) | SourceOutcome::Empty(_) => {
                if let Some(e) = o.issue() {
                    super::inline_warning(ui, &format!("⚠ {e}"));
                }
            }
        }
    }
}
