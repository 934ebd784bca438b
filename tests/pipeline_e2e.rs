// tests/pipeline_e2e.rs
//
// Fetch → locate → normalize → aggregate → chart/map, through the cache,
// with an in-memory fetcher.
mod common;

use std::collections::HashSet;

use gdp_scrape::chart::{comparison_chart, continent_chart};
use gdp_scrape::config::options::ScrapeOptions;
use gdp_scrape::core::cache::FetchCache;
use gdp_scrape::data;
use gdp_scrape::map::MapView;
use gdp_scrape::present::{self, NO_DATA};
use gdp_scrape::progress::Progress;
use gdp_scrape::scrape::{self, SourceOutcome};
use gdp_scrape::specs::sources::Source;
use gdp_scrape::GdpError;

use common::{FixtureFetch, COMBINED, NO_TABLES, THREE_TABLES, URL};

fn opts() -> ScrapeOptions {
    ScrapeOptions { url: URL.to_string(), ..ScrapeOptions::default() }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, label: &str) { self.done.push(label.to_string()); }
    fn item_failed(&mut self, label: &str, _reason: &str) { self.failed.push(label.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn three_recognized_tables() {
    let fetch = FixtureFetch::new(THREE_TABLES);
    let mut cache = FetchCache::new(600);
    let mut rec = Recorder::default();

    let report = scrape::run(&opts(), &mut cache, &fetch, Some(&mut rec)).unwrap();

    assert!(report.is_complete());
    assert!(report.issues().is_empty());
    assert_eq!(report.outcomes.len(), 3);
    for s in Source::ALL {
        assert!(report.records(s).unwrap().len() >= 2, "{s}");
    }
    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, vec!["IMF", "World Bank", "United Nations"]);
    assert!(rec.finished);

    let union: HashSet<String> = report
        .loaded()
        .flat_map(|r| r.records.iter().map(|g| g.country.clone()))
        .collect();
    let joined = report.joined();
    assert!(joined.len() <= union.len());
    assert_eq!(joined.len(), 6);

    let chart = comparison_chart(&joined, Source::Imf, 3);
    assert_eq!(chart.bars.len(), 3);
    assert_eq!(chart.bars[0].label, "United States");
    assert_eq!(chart.series, vec!["IMF", "World Bank", "United Nations"]);

    let continents = report.by_continent(Source::UnitedNations).unwrap();
    let stacked = continent_chart(&continents, Source::UnitedNations, 1);
    assert!(stacked.stacked);
    assert!(!stacked.is_empty());
}

#[test]
fn page_is_fetched_once_while_cached() {
    let fetch = FixtureFetch::new(THREE_TABLES);
    let mut cache = FetchCache::new(600);

    scrape::run(&opts(), &mut cache, &fetch, None).unwrap();
    scrape::run(&opts(), &mut cache, &fetch, None).unwrap();
    assert_eq!(fetch.calls.get(), 1);

    assert!(cache.invalidate(URL));
    scrape::run(&opts(), &mut cache, &fetch, None).unwrap();
    assert_eq!(fetch.calls.get(), 2);
}

#[test]
fn combined_layout_loads_every_source() {
    let fetch = FixtureFetch::new(COMBINED);
    let mut cache = FetchCache::new(600);
    let report = scrape::run(&opts(), &mut cache, &fetch, None).unwrap();

    assert!(report.is_complete());
    let joined = report.joined();
    // Tuvalu has no IMF figure
    let tuvalu = joined.rows.iter().find(|r| r.country == "Tuvalu").unwrap();
    assert_eq!(tuvalu.values, vec![None, Some(60.0), Some(55.0)]);

    let ds = data::joined_dataset(&joined);
    assert_eq!(ds.headers, vec!["Country", "IMF", "World Bank", "United Nations"]);
    assert_eq!(ds.rows.last().unwrap(), &vec!["Tuvalu".to_string(), String::new(), "60".into(), "55".into()]);
}

#[test]
fn no_marker_tables_aborts_without_charts() {
    let fetch = FixtureFetch::new(NO_TABLES);
    let mut cache = FetchCache::new(600);
    let mut rec = Recorder::default();

    let err = scrape::run(&opts(), &mut cache, &fetch, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, GdpError::NoTablesFound { .. }));
    assert!(err.is_fatal());
    assert!(rec.finished);
    assert!(rec.done.is_empty());
}

#[test]
fn fetch_failure_is_fatal_and_not_cached() {
    let fetch = FixtureFetch::failing();
    let mut cache = FetchCache::new(600);

    let err = scrape::run(&opts(), &mut cache, &fetch, None).unwrap_err();
    assert!(matches!(err, GdpError::Fetch { .. }));
    assert!(cache.is_empty());
}

#[test]
fn partial_report_flags_missing_sources() {
    static ONE_TABLE: &str = r#"<table class="wikitable">
        <tr><th>Country</th><th>IMF</th></tr>
        <tr><td>Japan</td><td>4,231,141</td></tr>
        <tr><td>India</td><td>3,937,011</td></tr></table>
        <table class="wikitable">
        <tr><th>Country</th><th>World Bank</th></tr>
        <tr><td>World</td><td>100,562,011</td></tr></table>"#;
    let fetch = FixtureFetch::new(ONE_TABLE);
    let mut cache = FetchCache::new(600);
    let mut rec = Recorder::default();

    let report = scrape::run(&opts(), &mut cache, &fetch, Some(&mut rec)).unwrap();
    assert!(!report.is_complete());
    assert!(matches!(report.outcomes[0], SourceOutcome::Loaded(_)));
    assert_eq!(report.outcomes[1], SourceOutcome::Empty(Source::WorldBank));
    assert_eq!(report.outcomes[2], SourceOutcome::Missing(Source::UnitedNations));
    assert_eq!(rec.failed, vec!["World Bank", "United Nations"]);

    let issues = present::render_issues(&report.issues());
    assert_eq!(issues.lines().count(), 2);
    assert!(issues.contains("World Bank"));

    // Views of the missing source degrade to the inline message
    assert!(report.by_continent(Source::UnitedNations).is_none());
    let empty = data::DataSet::default();
    assert_eq!(present::render_table(&empty).trim_end(), NO_DATA);
}

#[test]
fn marker_renders_and_boundaries_are_accepted() {
    let sf = MapView::single(37.7749, -122.4194, 0).unwrap();
    assert!(sf.project(sf.markers[0].at, 800.0, 400.0).is_some());
    assert_eq!(sf.markers[0].popup, "Your location");

    let corner = MapView::single(90.0, -180.0, 0).unwrap();
    assert_eq!(corner.project(corner.markers[0].at, 800.0, 400.0), Some((0.0, 0.0)));

    assert!(matches!(
        MapView::single(-90.1, 0.0, 0),
        Err(GdpError::CoordinateOutOfRange { .. })
    ));

    let text = present::render_map(&sf, 73, 25);
    assert!(text.contains('*'));
}
