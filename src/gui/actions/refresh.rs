// src/gui/actions/refresh.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Run the pipeline on the UI thread. `force` drops the cached page first.
/// A fatal error keeps the previous report on screen alongside the message.
pub fn refresh(app: &mut App, force: bool) {
    let opts = app.state.options.scrape.clone();

    let fetcher = match &app.fetcher {
        Ok(f) => f,
        Err(e) => {
            let msg = format!("Error: HTTP client unavailable: {e}");
            app.last_error = Some(msg.clone());
            app.status(msg);
            app.running = false;
            return;
        }
    };

    if force && app.cache.invalidate(&opts.url) {
        logd!("Cache: Dropped {}", opts.url);
    }

    logf!("Refresh: Begin url={} marker={} force={}", opts.url, opts.marker, force);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    let res = scrape::run(&opts, &mut app.cache, fetcher, Some(&mut prog));

    match res {
        Ok(report) => {
            logf!(
                "Refresh: OK loaded={}/{} issues={}",
                report.loaded().count(),
                report.outcomes.len(),
                report.issues().len()
            );
            app.report = Some(report);
            app.last_error = None;
        }
        Err(e) => {
            loge!("Refresh: Error: {}", e);
            let msg = format!("Error: {e}");
            app.last_error = Some(msg.clone());
            app.status(msg);
        }
    }

    app.running = false;
    app.rebuild_view();
}
