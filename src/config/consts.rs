// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/List_of_countries_by_GDP_(nominal)";
pub const USER_AGENT: &str = concat!("gdp_scrape/", env!("CARGO_PKG_VERSION"));

// Page structure
pub const TABLE_MARKER: &str = "table.wikitable";
pub const MAX_SPAN: usize = 64; // colspan/rowspan clamp

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CACHE_TTL_SECS: i64 = 600;

// Views
pub const DEFAULT_TOP_N: usize = 15;
pub const MAX_TOP_N: usize = 60;

// Map
pub const DEFAULT_LAT: f64 = 0.0;
pub const DEFAULT_LON: f64 = 0.0;
pub const DEFAULT_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 6;
pub const MARKER_POPUP: &str = "Your location";
