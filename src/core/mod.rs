// src/core/mod.rs

pub mod cache;
pub mod html;
pub mod net;
pub mod sanitize;

pub use cache::FetchCache;
pub use net::{Fetch, HttpFetcher, RawPage};
