// src/records.rs
//
// Normalized, per-source GDP rows.

use crate::specs::sources::Source;

#[derive(Clone, Debug, PartialEq)]
pub struct GdpRecord {
    /// Display name, never empty.
    pub country: String,
    /// Non-negative, in the unit the source reports (US$ million on the wiki page).
    pub gdp: f64,
    pub year: Option<i32>,
    pub source: Source,
}

/// All surviving rows of one source's table. Country names are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRecords {
    pub source: Source,
    pub records: Vec<GdpRecord>,
    /// Rows skipped during normalization (bad numbers, aggregates, duplicates).
    pub dropped: usize,
}

impl SourceRecords {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, country: &str) -> Option<&GdpRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.gdp).sum()
    }
}
