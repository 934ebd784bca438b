// src/chart.rs
//
// Toolkit-agnostic bar chart models. The GUI paints them, the CLI prints them.

use crate::aggregate::{ContinentView, JoinedView};
use crate::specs::sources::Source;

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Grouped charts: one segment per series. Stacked charts: one per member.
    pub segments: Vec<Segment>,
}

impl Bar {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    pub fn peak(&self) -> f64 {
        self.segments.iter().map(|s| s.value).fold(0.0, f64::max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    /// Legend entries for grouped charts; empty for stacked ones.
    pub series: Vec<String>,
    pub bars: Vec<Bar>,
    pub stacked: bool,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest extent along the value axis.
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| if self.stacked { b.total() } else { b.peak() })
            .fold(0.0, f64::max)
    }
}

/// Top `top_n` countries ranked by `rank_by`, one segment per joined source.
/// Sources that lack a country contribute zero.
pub fn comparison_chart(view: &JoinedView, rank_by: Source, top_n: usize) -> BarChart {
    let series = view.sources.iter().map(|s| s.label().to_string()).collect();
    let rank_ix = view.source_index(rank_by);

    let bars = view
        .ranked_by(rank_by)
        .into_iter()
        .filter(|r| rank_ix.is_some_and(|ix| r.values[ix].is_some()))
        .take(top_n)
        .map(|r| Bar {
            label: r.country.clone(),
            segments: view
                .sources
                .iter()
                .enumerate()
                .map(|(i, s)| Segment { label: s.label().to_string(), value: r.value_or_zero(i) })
                .collect(),
        })
        .collect();

    BarChart {
        title: format!("GDP by source (top {top_n} by {rank_by})"),
        series,
        bars,
        stacked: false,
    }
}

/// One stacked bar per continent. The `top_members` largest members get their
/// own segment; the rest fold into "Other".
pub fn continent_chart(view: &ContinentView, source: Source, top_members: usize) -> BarChart {
    let bars = view
        .groups
        .iter()
        .map(|g| {
            let mut segments: Vec<Segment> = g
                .members
                .iter()
                .take(top_members)
                .map(|(c, v)| Segment { label: c.clone(), value: *v })
                .collect();
            let rest: f64 = g.members.iter().skip(top_members).map(|(_, v)| v).sum();
            if g.members.len() > top_members {
                segments.push(Segment { label: s!("Other"), value: rest });
            }
            Bar { label: g.continent.label().to_string(), segments }
        })
        .collect();

    BarChart {
        title: format!("GDP by continent ({source})"),
        series: Vec::new(),
        bars,
        stacked: true,
    }
}
