// src/specs/gdp_page.rs
//! Header keywords and row filters for the GDP list page.

/// Rows that are totals, not countries. Exact match after name cleaning.
pub const AGGREGATE_ROWS: &[&str] = &["World", "European Union", "Euro area", "Eurozone", "Total"];

pub fn is_aggregate_row(country: &str) -> bool {
    AGGREGATE_ROWS.contains(&country)
}

pub fn is_country_header(h: &str) -> bool {
    let h = h.to_lowercase();
    h.contains("country") || h.contains("territory") || h.contains("economy")
}

pub fn is_year_header(h: &str) -> bool {
    h.to_lowercase().contains("year")
}

/// "GDP (US$ million)", "Estimate", "IMF[1] Estimate" …
pub fn is_gdp_header(h: &str) -> bool {
    let h = h.to_lowercase();
    (h.contains("gdp") || h.contains("estimate")) && !h.contains("year")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_keywords() {
        assert!(is_country_header("Country/Territory"));
        assert!(is_gdp_header("IMF[1][13] Estimate"));
        assert!(is_gdp_header("GDP (US$ million)"));
        assert!(!is_gdp_header("IMF Year"));
        assert!(is_year_header("World Bank Year"));
    }

    #[test]
    fn aggregate_rows_are_exact() {
        assert!(is_aggregate_row("World"));
        assert!(!is_aggregate_row("World Cup"));
        assert!(!is_aggregate_row("world"));
    }
}
