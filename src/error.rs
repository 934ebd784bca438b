// src/error.rs
use thiserror::Error;

use crate::specs::sources::Source;

#[derive(Error, Debug)]
pub enum GdpError {
    /// Transport error or a non-success HTTP status.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The page has no table carrying the structural marker.
    #[error("no tables matching `{marker}` found on the page")]
    NoTablesFound { marker: String },

    /// A required source label matched none of the candidate tables.
    #[error("no table found for source {0}")]
    MissingSource(Source),

    /// A table was located but no row survived normalization.
    #[error("table for source {0} has no valid rows")]
    EmptySource(Source),

    #[error("invalid table selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("{axis} {value} out of range [{min}, {max}]")]
    CoordinateOutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl GdpError {
    /// Errors that end the whole run (vs. per-source degradation).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GdpError::Fetch { .. } | GdpError::NoTablesFound { .. } | GdpError::InvalidSelector { .. }
        )
    }
}

impl From<reqwest::Error> for GdpError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        GdpError::Fetch { url, reason: e.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, GdpError>;
