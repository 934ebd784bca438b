// src/core/html.rs
//
// DOM helpers on top of `scraper`: marker-table selection, visible cell text,
// and colspan/rowspan expansion into a rectangular grid.

use scraper::{ElementRef, Html, Node, Selector};

use crate::config::consts::MAX_SPAN;
use crate::core::sanitize::normalize_ws;
use crate::error::{GdpError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub is_header: bool,
}

impl Cell {
    pub fn empty() -> Self { Self { text: s!(), is_header: false } }
}

/// A cell as written in the markup, before spans are expanded.
#[derive(Clone, Debug)]
pub struct SpanCell {
    pub cell: Cell,
    pub colspan: usize,
    pub rowspan: usize,
}

/// One marker table, expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlTable {
    pub caption: Option<String>,
    /// Rectangular: every row has `width()` cells.
    pub grid: Vec<Vec<Cell>>,
}

impl HtmlTable {
    pub fn width(&self) -> usize {
        self.grid.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Leading rows made only of `<th>` cells.
    pub fn header_row_count(&self) -> usize {
        self.grid
            .iter()
            .take_while(|r| !r.is_empty() && r.iter().all(|c| c.is_header))
            .count()
    }

    /// Distinct header texts stacked above column `col`, top to bottom.
    pub fn header_parts(&self, col: usize) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();
        for row in &self.grid[..self.header_row_count()] {
            if let Some(c) = row.get(col) {
                if !c.text.is_empty() && parts.last() != Some(&c.text) {
                    parts.push(c.text.clone());
                }
            }
        }
        parts
    }

    pub fn body(&self) -> &[Vec<Cell>] {
        &self.grid[self.header_row_count()..]
    }
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| GdpError::InvalidSelector {
        selector: s!(css),
        reason: format!("{e:?}"),
    })
}

/// Every `<table>` matching `marker`, in document order.
pub fn select_tables(doc: &Html, marker: &Selector) -> Vec<HtmlTable> {
    doc.select(marker)
        .filter(|el| el.value().name() == "table")
        .map(read_table)
        .collect()
}

fn read_table(table: ElementRef) -> HtmlTable {
    let caption = table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|c| c.value().name() == "caption")
        .map(visible_text)
        .filter(|t| !t.is_empty());

    let rows: Vec<Vec<SpanCell>> = own_rows(table)
        .into_iter()
        .map(|tr| {
            tr.children()
                .filter_map(ElementRef::wrap)
                .filter(|c| matches!(c.value().name(), "td" | "th"))
                .map(|c| SpanCell {
                    cell: Cell { text: visible_text(c), is_header: c.value().name() == "th" },
                    colspan: span_attr(c, "colspan"),
                    rowspan: span_attr(c, "rowspan"),
                })
                .collect()
        })
        .collect();

    HtmlTable { caption, grid: expand_grid(rows) }
}

/// `<tr>`s whose nearest enclosing table is `table` (skips nested tables).
fn own_rows(table: ElementRef) -> Vec<ElementRef> {
    table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
        .filter(|tr| nearest_table(*tr).map(|t| t.id()) == Some(table.id()))
        .collect()
}

fn nearest_table(el: ElementRef) -> Option<ElementRef> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}

fn span_attr(el: ElementRef, name: &str) -> usize {
    el.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

fn is_hidden(el: ElementRef) -> bool {
    let v = el.value();
    if matches!(v.name(), "style" | "script") {
        return true;
    }
    v.attr("style")
        .map(|st| st.replace(' ', "").to_ascii_lowercase().contains("display:none"))
        .unwrap_or(false)
}

/// Text a reader would see: skips `<style>`, `<script>` and `display:none`.
pub fn visible_text(el: ElementRef) -> String {
    let mut out = s!();
    for node in el.descendants() {
        match node.value() {
            Node::Text(t) => {
                let hidden = node
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .take_while(|a| a.id() != el.id())
                    .any(is_hidden);
                if !hidden {
                    out.push_str(t);
                }
            }
            Node::Element(e) if e.name() == "br" => out.push(' '),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Lay out cells on a grid, repeating each one over its colspan/rowspan.
/// Rows are padded with empty cells to the widest row.
pub fn expand_grid(rows: Vec<Vec<SpanCell>>) -> Vec<Vec<Cell>> {
    // per column: (cell, rows still to fill)
    let mut carry: Vec<Option<(Cell, usize)>> = Vec::new();
    let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());

    for row in rows {
        let mut out: Vec<Cell> = Vec::new();
        let mut col = 0usize;
        let mut cells = row.into_iter();

        loop {
            if let Some(Some((cell, left))) = carry.get_mut(col) {
                out.push(cell.clone());
                *left -= 1;
                if *left == 0 {
                    carry[col] = None;
                }
                col += 1;
                continue;
            }

            let Some(sc) = cells.next() else { break };
            for _ in 0..sc.colspan {
                if carry.len() <= col {
                    carry.resize(col + 1, None);
                }
                if sc.rowspan > 1 {
                    carry[col] = Some((sc.cell.clone(), sc.rowspan - 1));
                }
                out.push(sc.cell.clone());
                col += 1;
            }
        }

        // rowspans hanging past the last real cell of this row
        if let Some(last) = carry.iter().rposition(|c| c.is_some()) {
            while col <= last {
                match carry[col].take() {
                    Some((cell, left)) => {
                        out.push(cell.clone());
                        if left > 1 {
                            carry[col] = Some((cell, left - 1));
                        }
                    }
                    None => out.push(Cell::empty()),
                }
                col += 1;
            }
        }

        grid.push(out);
    }

    let width = grid.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in &mut grid {
        row.resize(width, Cell::empty());
    }
    grid
}
