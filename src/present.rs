// src/present.rs
//
// Plain-text renderers used by the CLI (and for GUI number labels).

use crate::chart::BarChart;
use crate::data::DataSet;
use crate::error::GdpError;
use crate::map::MapView;

pub const NO_DATA: &str = "No data to display";

/// Rounded, comma-grouped: `1234567.4` → `1,234,567`.
pub fn format_gdp(v: f64) -> String {
    let digits = format!("{:.0}", v.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0.0 && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn is_numeric_cell(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
}

/// Aligned columns; numeric cells right-aligned.
pub fn render_table(ds: &DataSet) -> String {
    if ds.is_empty() {
        return join!(NO_DATA, "\n");
    }

    let cols = ds.header_count().max(ds.rows.iter().map(|r| r.len()).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for row in std::iter::once(&ds.headers).chain(ds.rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |row: &[String]| -> String {
        let cells: Vec<String> = (0..cols)
            .map(|i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if is_numeric_cell(cell) {
                    format!("{:>w$}", cell, w = widths[i])
                } else {
                    format!("{:<w$}", cell, w = widths[i])
                }
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    if !ds.headers.is_empty() {
        out.push_str(&line(&ds.headers));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');
    }
    for row in &ds.rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// Horizontal bars, `width` characters for the largest value.
/// Grouped charts print one line per series under each label.
pub fn render_bars(chart: &BarChart, width: usize) -> String {
    if chart.is_empty() {
        return join!(NO_DATA, "\n");
    }

    let max = chart.max_value();
    let scale = |v: f64| if max > 0.0 { ((v / max) * width as f64).round() as usize } else { 0 };
    let label_w = chart.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    let mut out = format!("{}\n", chart.title);
    for bar in &chart.bars {
        if chart.stacked {
            let top = bar
                .segments
                .iter()
                .take(3)
                .map(|s| s.label.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "{:<lw$}  {:<w$}  {}  ({})\n",
                bar.label,
                "#".repeat(scale(bar.total())),
                format_gdp(bar.total()),
                top,
                lw = label_w,
                w = width,
            ));
        } else {
            for (i, seg) in bar.segments.iter().enumerate() {
                let name = if i == 0 { bar.label.as_str() } else { "" };
                out.push_str(&format!(
                    "{:<lw$}  {:<14} {:<w$}  {}\n",
                    name,
                    seg.label,
                    "#".repeat(scale(seg.value)),
                    format_gdp(seg.value),
                    lw = label_w,
                    w = width,
                ));
            }
        }
    }
    out
}

/// ASCII map of the viewport: `+` graticule crossings, `*` markers,
/// popup text listed underneath.
pub fn render_map(view: &MapView, cols: usize, rows: usize) -> String {
    let (cols, rows) = (cols.max(2), rows.max(2));
    let mut grid = vec![vec![' '; cols]; rows];

    let b = view.bounds();
    let (lats, lons) = view.graticule();
    let to_col = |lon: f64| (((lon - b.west) / (b.east - b.west)) * (cols - 1) as f64).round() as usize;
    let to_row = |lat: f64| (((b.north - lat) / (b.north - b.south)) * (rows - 1) as f64).round() as usize;

    for &lat in &lats {
        let r = to_row(lat).min(rows - 1);
        for c in 0..cols {
            grid[r][c] = '-';
        }
    }
    for &lon in &lons {
        let c = to_col(lon).min(cols - 1);
        for r in 0..rows {
            grid[r][c] = if grid[r][c] == '-' { '+' } else { '|' };
        }
    }

    let mut placed = Vec::new();
    for m in &view.markers {
        if let Some((x, y)) = view.project(m.at, (cols - 1) as f32, (rows - 1) as f32) {
            let (c, r) = ((x.round() as usize).min(cols - 1), (y.round() as usize).min(rows - 1));
            grid[r][c] = '*';
            placed.push(m);
        }
    }

    let mut out = format!(
        "Map  lat {:.1}..{:.1}  lon {:.1}..{:.1}  zoom {}\n",
        b.south, b.north, b.west, b.east, view.zoom
    );
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    for m in placed {
        out.push_str(&format!("* {} ({:.4}, {:.4})\n", m.popup, m.at.lat(), m.at.lon()));
    }
    out
}

/// One line per issue: `error:` for run-ending errors, `!` for degraded sources.
pub fn render_issues(issues: &[GdpError]) -> String {
    issues
        .iter()
        .map(|e| {
            let mark = if e.is_fatal() { "error:" } else { "!" };
            format!("{mark} {e}\n")
        })
        .collect()
}
