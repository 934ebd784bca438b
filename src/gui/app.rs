// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::PageKind,
        state::AppState,
    },
    core::{cache::FetchCache, net::HttpFetcher},
    data::DataSet,
    scrape::Report,
};

use super::{actions, components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "GDP Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // session-lifetime page cache; the only state kept between refreshes
    pub cache: FetchCache,
    pub fetcher: Result<HttpFetcher, String>,

    // last successful run, and the fatal error of the last attempt (if any)
    pub report: Option<Report>,
    pub last_error: Option<String>,

    // flat table of the CURRENT page (grid + copy)
    pub dataset: DataSet,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // refresh requested; runs at the start of the next frame so the
    // "Fetching" status gets painted first
    pub pending_refresh: Option<bool>,
    frames: u64,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let fetcher = HttpFetcher::new().map_err(|e| {
            loge!("Init: HTTP client unavailable: {e}");
            e.to_string()
        });

        state.gui.current_page_index = router::index_of(&PageKind::Records).unwrap_or(0);

        let cache = FetchCache::new(state.options.scrape.cache_ttl_secs);
        logf!("Init: url={}, ttl={}s", state.options.scrape.url, state.options.scrape.cache_ttl_secs);

        let mut app = Self {
            state,
            cache,
            fetcher,
            report: None,
            last_error: None,
            dataset: DataSet::default(),
            status: Arc::new(Mutex::new(s!("Fetching…"))),
            running: true,
            pending_refresh: Some(false),
            frames: 0,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx.min(router::all_pages().len() - 1);
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Ask for a refresh on the next frame. `force` drops the cached page first.
    pub fn request_refresh(&mut self, force: bool) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending_refresh = Some(force);
        self.status(if force { "Re-fetching…" } else { "Refreshing…" });
    }

    /// Recompute the current page's flat table after data or view changes.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        self.dataset = page.dataset(self);
        logd!(
            "View: {:?} rows={} headers={}",
            page.kind(),
            self.dataset.row_count(),
            self.dataset.header_count()
        );
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.frames > 0 {
            if let Some(force) = self.pending_refresh.take() {
                actions::refresh(self, force);
            }
        }

        egui::SidePanel::left("sources")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                components::source_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        if self.pending_refresh.is_some() {
            ctx.request_repaint();
        }
        self.frames += 1;
    }
}
