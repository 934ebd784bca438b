// src/csv.rs
//
// Delimited text output for clipboard copy and the CLI.

use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write headers (optionally) and rows.
pub fn write_all<W: Write>(
    mut w: W,
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers && !headers.is_empty() {
        write_row(&mut w, headers, sep)?;
    }
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Full export string for Copy.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_all(&mut buf, headers, rows, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let out = to_export_string(
            &row(&["Country", "GDP"]),
            &[row(&["Korea, South", "1712793"]), row(&["Japan", "4231141"])],
            true,
            ',',
        );
        assert_eq!(out, "Country,GDP\n\"Korea, South\",1712793\nJapan,4231141\n");
    }

    #[test]
    fn tsv_without_headers() {
        let out = to_export_string(&row(&["Country"]), &[row(&["A, B", "say \"hi\""])], false, '\t');
        assert_eq!(out, "A, B\t\"say \"\"hi\"\"\"\n");
    }
}
