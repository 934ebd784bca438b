// src/scrape/locate.rs
//
// Table Locator: marker tables → per-source raw tables.
//
// Rules:
// - only tables matching the structural marker are candidates;
// - a table is labeled by the organization its header (or caption) names;
// - a header naming several organizations is split into one table per source,
//   each keeping the shared columns (country, region, …);
// - per label, the first table in document order wins;
// - a required label with no table is reported as `Located::NotFound`.

use scraper::Html;

use crate::core::html::{self, HtmlTable};
use crate::core::net::RawPage;
use crate::error::{GdpError, Result};
use crate::specs::sources::Source;

#[derive(Clone, Debug, PartialEq)]
pub struct RawTable {
    pub label: Option<Source>,
    pub caption: Option<String>,
    /// Combined header text per column.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).chain([self.headers.len()]).max().unwrap_or(0)
    }

    pub fn header(&self, col: usize) -> &str {
        self.headers.get(col).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r.get(col).map(|s| s.as_str()).unwrap_or(""))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Located {
    Found { source: Source, table: RawTable },
    NotFound(Source),
}

impl Located {
    pub fn source(&self) -> Source {
        match self {
            Located::Found { source, .. } => *source,
            Located::NotFound(source) => *source,
        }
    }

    pub fn table(&self) -> Option<&RawTable> {
        match self {
            Located::Found { table, .. } => Some(table),
            Located::NotFound(_) => None,
        }
    }
}

/// Locate one table per required source, in the order given.
pub fn locate(page: &RawPage, marker: &str, required: &[Source]) -> Result<Vec<Located>> {
    let labeled = labeled_tables(&page.markup, marker)?;

    let located = required
        .iter()
        .map(|&source| {
            let mut hits = labeled.iter().filter(|t| t.label == Some(source));
            match hits.next() {
                Some(first) => {
                    let later = hits.count();
                    if later > 0 {
                        logd!("Locate: {source} matched {} more table(s); keeping the first", later);
                    }
                    Located::Found { source, table: first.clone() }
                }
                None => {
                    logw!("Locate: no table names {source}");
                    Located::NotFound(source)
                }
            }
        })
        .collect();

    Ok(located)
}

/// Every labeled table projection on the page, in document order.
/// Errors with `NoTablesFound` when nothing carries the marker.
pub fn labeled_tables(markup: &str, marker: &str) -> Result<Vec<RawTable>> {
    let selector = html::parse_selector(marker)?;
    let doc = Html::parse_document(markup);
    let tables = html::select_tables(&doc, &selector);

    if tables.is_empty() {
        return Err(GdpError::NoTablesFound { marker: s!(marker) });
    }
    logd!("Locate: {} candidate table(s) for `{marker}`", tables.len());

    let mut out = Vec::new();
    for (ix, t) in tables.iter().enumerate() {
        let labeled = label_table(t);
        if labeled.is_empty() {
            logd!("Locate: table #{ix} names no known source, skipped");
        }
        out.extend(labeled);
    }
    Ok(out)
}

fn label_table(t: &HtmlTable) -> Vec<RawTable> {
    let width = t.width();
    let parts: Vec<Vec<String>> = (0..width).map(|c| t.header_parts(c)).collect();

    let col_source: Vec<Option<Source>> = parts
        .iter()
        .map(|ps| ps.iter().find_map(|p| Source::detect(p)))
        .collect();

    let mut named: Vec<Source> = Vec::new();
    for s in col_source.iter().flatten() {
        if !named.contains(s) {
            named.push(*s);
        }
    }

    let headers: Vec<String> = parts.iter().map(|ps| ps.join(" ")).collect();
    let body: Vec<Vec<String>> = t
        .body()
        .iter()
        .map(|r| r.iter().map(|c| c.text.clone()).collect())
        .collect();

    let whole = |label: Source| RawTable {
        label: Some(label),
        caption: t.caption.clone(),
        headers: headers.clone(),
        rows: body.clone(),
    };

    match named.as_slice() {
        [] => t
            .caption
            .as_deref()
            .and_then(Source::detect)
            .map(|s| vec![whole(s)])
            .unwrap_or_default(),
        [only] => vec![whole(*only)],
        many => many
            .iter()
            .map(|&s| {
                let cols: Vec<usize> = (0..width)
                    .filter(|&c| col_source[c].is_none() || col_source[c] == Some(s))
                    .collect();
                RawTable {
                    label: Some(s),
                    caption: t.caption.clone(),
                    headers: cols.iter().map(|&c| headers[c].clone()).collect(),
                    rows: body
                        .iter()
                        .map(|r| cols.iter().map(|&c| r[c].clone()).collect())
                        .collect(),
                }
            })
            .collect(),
    }
}
