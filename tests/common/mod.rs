// tests/common/mod.rs
//
// Fixture pages and an in-memory fetcher, shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use gdp_scrape::core::net::{Fetch, RawPage};
use gdp_scrape::{GdpError, Result};

pub const THREE_TABLES: &str = include_str!("../fixtures/three_tables.html");
pub const COMBINED: &str = include_str!("../fixtures/combined.html");
pub const NO_TABLES: &str = include_str!("../fixtures/no_tables.html");

pub const URL: &str = "https://example.test/wiki/GDP";

pub fn page(markup: &str) -> RawPage {
    RawPage::new(URL, markup)
}

/// Serves one fixed page and counts requests. `fail` turns every request
/// into a fetch error.
pub struct FixtureFetch {
    pub markup: &'static str,
    pub fail: bool,
    pub calls: Cell<usize>,
}

impl FixtureFetch {
    pub fn new(markup: &'static str) -> Self {
        Self { markup, fail: false, calls: Cell::new(0) }
    }

    pub fn failing() -> Self {
        Self { markup: "", fail: true, calls: Cell::new(0) }
    }
}

impl Fetch for FixtureFetch {
    fn fetch(&self, url: &str) -> Result<RawPage> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(GdpError::Fetch { url: url.to_string(), reason: "HTTP 503 Service Unavailable".into() });
        }
        Ok(RawPage::new(url, self.markup))
    }
}
