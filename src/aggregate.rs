// src/aggregate.rs
//
// Cross-source join (by exact country string) and continent grouping.

use std::collections::HashMap;

use crate::classify::{classify, Continent};
use crate::records::{GdpRecord, SourceRecords};
use crate::specs::sources::Source;

#[derive(Clone, Debug, PartialEq)]
pub struct JoinedRow {
    pub country: String,
    /// One slot per `JoinedView::sources`, `None` where that source lacks the country.
    pub values: Vec<Option<f64>>,
    pub years: Vec<Option<i32>>,
}

impl JoinedRow {
    /// Zero-filled read for charts.
    pub fn value_or_zero(&self, ix: usize) -> f64 {
        self.values.get(ix).copied().flatten().unwrap_or(0.0)
    }
}

/// Country → per-source GDP. Row order: first source's order, then countries
/// first seen in later sources.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct JoinedView {
    pub sources: Vec<Source>,
    pub rows: Vec<JoinedRow>,
}

impl JoinedView {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn source_index(&self, source: Source) -> Option<usize> {
        self.sources.iter().position(|&s| s == source)
    }

    /// Recover one source's records exactly as they went in.
    pub fn project(&self, source: Source) -> Vec<GdpRecord> {
        let Some(ix) = self.source_index(source) else { return Vec::new() };
        self.rows
            .iter()
            .filter_map(|r| {
                r.values[ix].map(|gdp| GdpRecord {
                    country: r.country.clone(),
                    gdp,
                    year: r.years[ix],
                    source,
                })
            })
            .collect()
    }

    /// Rows present in every source.
    pub fn complete_rows(&self) -> impl Iterator<Item = &JoinedRow> {
        self.rows.iter().filter(|r| r.values.iter().all(|v| v.is_some()))
    }

    /// Rows ranked by one source, largest first; rows it lacks go last.
    pub fn ranked_by(&self, source: Source) -> Vec<&JoinedRow> {
        let mut v: Vec<&JoinedRow> = self.rows.iter().collect();
        if let Some(ix) = self.source_index(source) {
            v.sort_by(|a, b| {
                let (va, vb) = (a.values[ix].unwrap_or(-1.0), b.values[ix].unwrap_or(-1.0));
                vb.total_cmp(&va)
            });
        }
        v
    }
}

pub fn join(sets: &[SourceRecords]) -> JoinedView {
    let sources: Vec<Source> = sets.iter().map(|s| s.source).collect();
    let n = sources.len();

    let mut rows: Vec<JoinedRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (si, set) in sets.iter().enumerate() {
        for rec in &set.records {
            let ix = *index.entry(rec.country.clone()).or_insert_with(|| {
                rows.push(JoinedRow {
                    country: rec.country.clone(),
                    values: vec![None; n],
                    years: vec![None; n],
                });
                rows.len() - 1
            });
            rows[ix].values[si] = Some(rec.gdp);
            rows[ix].years[si] = rec.year;
        }
    }

    let view = JoinedView { sources, rows };
    let partial = view.len() - view.complete_rows().count();
    if partial > 0 {
        logd!("Join: {} of {} countries missing from at least one source (zero-filled)", partial, view.len());
    }
    view
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContinentGroup {
    pub continent: Continent,
    pub total: f64,
    /// Largest first.
    pub members: Vec<(String, f64)>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContinentView {
    /// `Continent::ALL` order, empty groups omitted.
    pub groups: Vec<ContinentGroup>,
}

impl ContinentView {
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    pub fn get(&self, continent: Continent) -> Option<&ContinentGroup> {
        self.groups.iter().find(|g| g.continent == continent)
    }

    pub fn grand_total(&self) -> f64 {
        self.groups.iter().map(|g| g.total).sum()
    }
}

pub fn group_by_continent(records: &[GdpRecord]) -> ContinentView {
    let mut buckets: HashMap<Continent, Vec<(String, f64)>> = HashMap::new();
    for r in records {
        buckets.entry(classify(&r.country)).or_default().push((r.country.clone(), r.gdp));
    }

    let groups = Continent::ALL
        .into_iter()
        .filter_map(|c| {
            let mut members = buckets.remove(&c)?;
            members.sort_by(|a, b| b.1.total_cmp(&a.1));
            let total = members.iter().map(|(_, v)| v).sum();
            Some(ContinentGroup { continent: c, total, members })
        })
        .collect();

    ContinentView { groups }
}
