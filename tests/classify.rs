// tests/classify.rs
use std::collections::HashSet;

use gdp_scrape::classify::{classify, members, Continent, TABLE_VERSION};

#[test]
fn total_for_any_input() {
    assert_eq!(classify(""), Continent::Unclassified);
    assert_eq!(classify("   "), Continent::Unclassified);
    assert_eq!(classify("Atlantis"), Continent::Unclassified);
    assert_eq!(classify("World"), Continent::Unclassified);
}

#[test]
fn known_countries() {
    assert_eq!(classify("Japan"), Continent::Asia);
    assert_eq!(classify("Germany"), Continent::Europe);
    assert_eq!(classify("United States"), Continent::NorthAmerica);
    assert_eq!(classify("Brazil"), Continent::SouthAmerica);
    assert_eq!(classify("Nigeria"), Continent::Africa);
    assert_eq!(classify("Fiji"), Continent::Oceania);
}

#[test]
fn input_is_trimmed_but_exact() {
    assert_eq!(classify("  France "), Continent::Europe);
    assert_eq!(classify("france"), Continent::Unclassified);
}

#[test]
fn name_variants() {
    assert_eq!(classify("Czechia"), classify("Czech Republic"));
    assert_eq!(classify("Türkiye"), classify("Turkey"));
    assert_ne!(classify("Czechia"), Continent::Unclassified);
}

#[test]
fn every_name_maps_to_exactly_one_continent() {
    let mut seen = HashSet::new();
    for c in Continent::ALL {
        for name in members(c) {
            assert!(seen.insert(*name), "{name} listed twice");
            assert_eq!(classify(name), c);
        }
    }
    assert!(members(Continent::Unclassified).is_empty());
    assert!(seen.len() > 190);
}

#[test]
fn display_order_ends_with_unclassified() {
    assert_eq!(Continent::ALL.last(), Some(&Continent::Unclassified));
    assert_eq!(Continent::NorthAmerica.to_string(), "North America");
    assert!(TABLE_VERSION >= 1);
}
