// src/scrape/normalize.rs
//
// Normalizer: one labeled RawTable → validated GdpRecords.

use std::collections::HashSet;

use super::locate::RawTable;
use crate::core::sanitize::{clean_country, parse_number, parse_year};
use crate::error::{GdpError, Result};
use crate::records::{GdpRecord, SourceRecords};
use crate::specs::gdp_page::{is_aggregate_row, is_country_header, is_gdp_header, is_year_header};
use crate::specs::sources::Source;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub country: usize,
    pub gdp: usize,
    pub year: Option<usize>,
}

/// Header matches take precedence; column order differs between sources.
pub fn identify_columns(table: &RawTable) -> Option<Columns> {
    let width = table.width();

    let country = (0..width)
        .find(|&c| is_country_header(table.header(c)))
        .or_else(|| (0..width).find(|&c| mostly_textual(table, c)))?;

    let year = (0..width).find(|&c| c != country && is_year_header(table.header(c)));

    let gdp = (0..width)
        .find(|&c| c != country && Some(c) != year && is_gdp_header(table.header(c)))
        .or_else(|| (country + 1..width).find(|&c| Some(c) != year && mostly_numeric(table, c)))?;

    Some(Columns { country, gdp, year })
}

fn non_empty(table: &RawTable, col: usize) -> impl Iterator<Item = &str> {
    table.column(col).filter(|s| !s.trim().is_empty())
}

fn mostly_numeric(table: &RawTable, col: usize) -> bool {
    let (mut num, mut all) = (0usize, 0usize);
    for cell in non_empty(table, col) {
        all += 1;
        if parse_number(cell).is_some() { num += 1; }
    }
    all > 0 && num * 2 > all
}

fn mostly_textual(table: &RawTable, col: usize) -> bool {
    let (mut text, mut all) = (0usize, 0usize);
    for cell in non_empty(table, col) {
        all += 1;
        if parse_number(cell).is_none() { text += 1; }
    }
    all > 0 && text * 2 > all
}

/// Clean and validate every row. Bad rows are counted, never fatal; a table
/// with no surviving row is `EmptySource`.
pub fn normalize(source: Source, table: &RawTable) -> Result<SourceRecords> {
    let Some(cols) = identify_columns(table) else {
        logw!("Normalize: {source}: no country/GDP columns in {:?}", table.headers);
        return Err(GdpError::EmptySource(source));
    };
    logd!("Normalize: {source}: columns {:?}", cols);

    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in &table.rows {
        let country = row.get(cols.country).map(|c| clean_country(c)).unwrap_or_default();
        if country.is_empty() || is_aggregate_row(&country) {
            dropped += 1;
            continue;
        }

        let Some(gdp) = row.get(cols.gdp).and_then(|c| parse_number(c)) else {
            dropped += 1;
            continue;
        };

        if !seen.insert(country.clone()) {
            logd!("Normalize: {source}: duplicate row for {country}, keeping the first");
            dropped += 1;
            continue;
        }

        let year = cols.year.and_then(|y| row.get(y)).and_then(|c| parse_year(c));
        records.push(GdpRecord { country, gdp, year, source });
    }

    if records.is_empty() {
        return Err(GdpError::EmptySource(source));
    }

    logd!("Normalize: {source}: {} record(s), {} dropped", records.len(), dropped);
    Ok(SourceRecords { source, records, dropped })
}
