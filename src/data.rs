// src/data.rs
//
// Flat string tables built from the typed views. Shared by the GUI data
// table, clipboard copy and the CLI's delimited and text output.
//
// Numbers are written plainly (no grouping) so copied data pastes cleanly.

use crate::aggregate::{ContinentView, JoinedView};
use crate::classify::classify;
use crate::records::SourceRecords;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of a header by exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

pub fn plain_number(v: f64) -> String {
    format!("{v}")
}

fn year_cell(y: Option<i32>) -> String {
    y.map(|y| y.to_string()).unwrap_or_default()
}

/// Country, Continent, GDP, Year. Table order.
pub fn records_dataset(set: &SourceRecords) -> DataSet {
    DataSet {
        headers: vec![s!("Country"), s!("Continent"), s!("GDP"), s!("Year")],
        rows: set
            .records
            .iter()
            .map(|r| {
                vec![
                    r.country.clone(),
                    classify(&r.country).to_string(),
                    plain_number(r.gdp),
                    year_cell(r.year),
                ]
            })
            .collect(),
    }
}

/// Country plus one column per source; blank where a source lacks the country.
pub fn joined_dataset(view: &JoinedView) -> DataSet {
    let mut headers = vec![s!("Country")];
    headers.extend(view.sources.iter().map(|s| s.label().to_string()));

    let rows = view
        .rows
        .iter()
        .map(|r| {
            let mut row = vec![r.country.clone()];
            row.extend(r.values.iter().map(|v| v.map(plain_number).unwrap_or_default()));
            row
        })
        .collect();

    DataSet { headers, rows }
}

/// Continent, Countries, Total, Largest.
pub fn continent_dataset(view: &ContinentView) -> DataSet {
    DataSet {
        headers: vec![s!("Continent"), s!("Countries"), s!("Total GDP"), s!("Largest")],
        rows: view
            .groups
            .iter()
            .map(|g| {
                vec![
                    g.continent.to_string(),
                    g.members.len().to_string(),
                    plain_number(g.total),
                    g.members.first().map(|(c, _)| c.clone()).unwrap_or_default(),
                ]
            })
            .collect(),
    }
}
