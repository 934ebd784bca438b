// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge about the GDP list page lives here: which
//! organizations publish a table, how their names show up in header cells,
//! and which header words identify the country / GDP / year columns.
//!
//! ## What lives here
//! - **Organization patterns** (`sources`): the fixed set of GDP sources and
//!   the exact strings that identify each one in a header or caption.
//! - **Column + row heuristics** (`gdp_page`): header keywords and the
//!   aggregate-row denylist (`World`, `European Union`, …).
//!
//! ## What does **not** live here
//! - Fetching/caching (`core::net`, `core::cache`).
//! - Walking the DOM (`core::html`) or deciding which table wins
//!   (`scrape::locate`).
//! - Numeric cleaning (`core::sanitize`).
//!
//! In short: **`specs` knows what the page says.** Other layers decide how to
//! read it and what to do with it.
pub mod gdp_page;
pub mod sources;
