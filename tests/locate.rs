// tests/locate.rs
mod common;

use gdp_scrape::config::consts::TABLE_MARKER;
use gdp_scrape::scrape::locate::{labeled_tables, locate, Located};
use gdp_scrape::specs::sources::Source;
use gdp_scrape::GdpError;

use common::{page, COMBINED, NO_TABLES, THREE_TABLES};

#[test]
fn three_tables_each_get_their_label() {
    let located = locate(&page(THREE_TABLES), TABLE_MARKER, &Source::ALL).unwrap();
    let labels: Vec<Source> = located.iter().map(|l| l.source()).collect();
    assert_eq!(labels, Source::ALL.to_vec());
    assert!(located.iter().all(|l| matches!(l, Located::Found { .. })));

    // caption fallback for the IMF table
    let imf = located[0].table().unwrap();
    assert_eq!(imf.caption.as_deref(), Some("Estimates by the International Monetary Fund"));
    assert_eq!(imf.headers, vec!["Rank", "Country", "GDP (US$ million)", "Year"]);
}

#[test]
fn labeling_is_deterministic() {
    let p = page(THREE_TABLES);
    let first = locate(&p, TABLE_MARKER, &Source::ALL).unwrap();
    for _ in 0..5 {
        assert_eq!(locate(&p, TABLE_MARKER, &Source::ALL).unwrap(), first);
    }
}

#[test]
fn first_table_in_document_order_wins() {
    let located = locate(&page(THREE_TABLES), TABLE_MARKER, &[Source::Imf]).unwrap();
    let imf = located[0].table().unwrap();
    assert!(imf.rows.iter().any(|r| r.iter().any(|c| c == "Japan")));
    assert!(!imf.rows.iter().any(|r| r.iter().any(|c| c == "Atlantis")));
}

#[test]
fn non_marker_and_unlabeled_tables_are_ignored() {
    let tables = labeled_tables(THREE_TABLES, TABLE_MARKER).unwrap();
    // IMF, World Bank, UN, second IMF; the cities table names nobody
    assert_eq!(tables.len(), 4);
    assert!(!tables.iter().any(|t| t.rows.iter().any(|r| r.iter().any(|c| c == "Nowhere" || c == "Tokyo"))));
}

#[test]
fn spanned_headers_are_combined() {
    let located = locate(&page(THREE_TABLES), TABLE_MARKER, &[Source::UnitedNations]).unwrap();
    let un = located[0].table().unwrap();
    assert_eq!(un.headers, vec!["Country", "United Nations Estimate", "United Nations Year"]);
    assert_eq!(un.rows[0], vec!["United States", "23,315,081", "2021"]);
}

#[test]
fn combined_table_is_split_per_source() {
    let located = locate(&page(COMBINED), TABLE_MARKER, &Source::ALL).unwrap();
    assert_eq!(located.len(), 3);

    let wb = located[1].table().unwrap();
    assert_eq!(wb.label, Some(Source::WorldBank));
    assert_eq!(
        wb.headers,
        vec!["Country/Territory", "UN region[6]", "World Bank[14] Estimate", "World Bank[14] Year"]
    );
    assert_eq!(wb.rows[1], vec!["United States", "Americas", "25,462,700", "2022"]);

    // "UN region" must not be read as the United Nations column
    let un = located[2].table().unwrap();
    assert_eq!(un.headers.len(), 4);
    assert_eq!(un.rows[1][2], "23,315,081");
}

#[test]
fn missing_source_is_not_substituted() {
    let markup = r#"<table class="wikitable"><tr><th>Country</th><th>IMF</th></tr>
        <tr><td>Japan</td><td>4,231,141</td></tr></table>"#;
    let located = locate(&page(markup), TABLE_MARKER, &Source::ALL).unwrap();
    assert!(matches!(located[0], Located::Found { source: Source::Imf, .. }));
    assert_eq!(located[1], Located::NotFound(Source::WorldBank));
    assert_eq!(located[2], Located::NotFound(Source::UnitedNations));
}

#[test]
fn no_marker_tables_is_an_error() {
    let err = locate(&page(NO_TABLES), TABLE_MARKER, &Source::ALL).unwrap_err();
    assert!(matches!(err, GdpError::NoTablesFound { .. }));
}

#[test]
fn bad_selector_is_reported() {
    let err = locate(&page(THREE_TABLES), "table[", &Source::ALL).unwrap_err();
    assert!(matches!(err, GdpError::InvalidSelector { .. }));
}

#[test]
fn nested_tables_do_not_leak_rows() {
    let markup = r#"<table class="wikitable">
        <tr><th>Country</th><th>World Bank</th></tr>
        <tr><td>Chile<table><tr><td>inner</td><td>7</td></tr></table></td><td>301,025</td></tr>
        </table>"#;
    let located = locate(&page(markup), TABLE_MARKER, &[Source::WorldBank]).unwrap();
    let wb = located[0].table().unwrap();
    assert_eq!(wb.rows.len(), 1);
    assert_eq!(wb.rows[0][1], "301,025");
}
