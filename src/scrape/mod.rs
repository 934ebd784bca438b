// src/scrape/mod.rs
//
// The pipeline: fetch (through the cache) → locate → normalize, one pass.
// Fatal conditions (fetch failure, no marker tables) end the run; a missing or
// empty source only marks that source in the report.

pub mod locate;
pub mod normalize;

use chrono::{DateTime, Utc};

use crate::{
    aggregate::{self, ContinentView, JoinedView},
    config::options::ScrapeOptions,
    core::{cache::FetchCache, net::{Fetch, RawPage}},
    error::{GdpError, Result},
    progress::Progress,
    records::SourceRecords,
    specs::sources::Source,
};

pub use locate::{locate, Located, RawTable};
pub use normalize::normalize;

#[derive(Clone, Debug, PartialEq)]
pub enum SourceOutcome {
    Loaded(SourceRecords),
    /// No table named this source.
    Missing(Source),
    /// A table was found but no row survived.
    Empty(Source),
}

impl SourceOutcome {
    pub fn source(&self) -> Source {
        match self {
            SourceOutcome::Loaded(r) => r.source,
            SourceOutcome::Missing(s) | SourceOutcome::Empty(s) => *s,
        }
    }

    pub fn records(&self) -> Option<&SourceRecords> {
        match self {
            SourceOutcome::Loaded(r) => Some(r),
            _ => None,
        }
    }

    /// The degradation as an error value, for inline reporting.
    pub fn issue(&self) -> Option<GdpError> {
        match self {
            SourceOutcome::Loaded(_) => None,
            SourceOutcome::Missing(s) => Some(GdpError::MissingSource(*s)),
            SourceOutcome::Empty(s) => Some(GdpError::EmptySource(*s)),
        }
    }
}

/// Result of one run: every requested source, in request order.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub outcomes: Vec<SourceOutcome>,
}

impl Report {
    pub fn loaded(&self) -> impl Iterator<Item = &SourceRecords> {
        self.outcomes.iter().filter_map(|o| o.records())
    }

    pub fn records(&self, source: Source) -> Option<&SourceRecords> {
        self.loaded().find(|r| r.source == source)
    }

    pub fn issues(&self) -> Vec<GdpError> {
        self.outcomes.iter().filter_map(|o| o.issue()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.records().is_some())
    }

    pub fn joined(&self) -> JoinedView {
        let sets: Vec<SourceRecords> = self.loaded().cloned().collect();
        aggregate::join(&sets)
    }

    /// Continent grouping of one source, `None` if it did not load.
    pub fn by_continent(&self, source: Source) -> Option<ContinentView> {
        self.records(source).map(|r| aggregate::group_by_continent(&r.records))
    }
}

/// Fetch (or reuse) the page and build a report.
pub fn run(
    opts: &ScrapeOptions,
    cache: &mut FetchCache,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching page…");
    }

    let page = match cache.get_or_fetch(&opts.url, fetcher) {
        Ok(page) => page,
        Err(e) => {
            loge!("Scrape: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    build_report(page, opts, progress)
}

/// Locate + normalize an already fetched page.
pub fn build_report(
    page: &RawPage,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.sources.len());
    }

    let located = match locate(page, &opts.marker, &opts.sources) {
        Ok(v) => v,
        Err(e) => {
            loge!("Scrape: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let mut outcomes = Vec::with_capacity(located.len());
    for loc in located {
        let source = loc.source();
        let outcome = match loc {
            Located::NotFound(_) => SourceOutcome::Missing(source),
            Located::Found { table, .. } => match normalize(source, &table) {
                Ok(records) => SourceOutcome::Loaded(records),
                Err(_) => SourceOutcome::Empty(source),
            },
        };

        if let Some(p) = progress.as_deref_mut() {
            match outcome.issue() {
                None => p.item_done(source.label()),
                Some(e) => p.item_failed(source.label(), &e.to_string()),
            }
        }
        outcomes.push(outcome);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let loaded = outcomes.iter().filter(|o| o.records().is_some()).count();
    logf!("Scrape: {} of {} source(s) loaded from {}", loaded, outcomes.len(), page.url);

    Ok(Report { url: page.url.clone(), fetched_at: page.fetched_at, outcomes })
}
