// src/config/options.rs
use super::consts::*;
use crate::specs::sources::Source;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub view: ViewOptions,
    pub map: MapOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            view: ViewOptions::default(),
            map: MapOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Records,
    Compare,
    Continents,
    Map,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    /// CSS selector for the structural marker.
    pub marker: String,
    /// Sources the run must try to locate, reported in this order.
    pub sources: Vec<Source>,
    pub cache_ttl_secs: i64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            marker: s!(TABLE_MARKER),
            sources: Source::ALL.to_vec(),
            cache_ttl_secs: CACHE_TTL_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    /// Source shown by the records page and used to rank the comparison chart.
    pub source: Source,
    pub top_n: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { source: Source::Imf, top_n: DEFAULT_TOP_N }
    }
}

impl ViewOptions {
    pub fn set_top_n(&mut self, n: usize) {
        self.top_n = n.clamp(1, MAX_TOP_N);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self { lat: DEFAULT_LAT, lon: DEFAULT_LON, zoom: DEFAULT_ZOOM }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Tsv, include_headers: true }
    }
}
