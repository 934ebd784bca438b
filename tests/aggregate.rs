// tests/aggregate.rs
use gdp_scrape::aggregate::{group_by_continent, join};
use gdp_scrape::classify::Continent;
use gdp_scrape::records::{GdpRecord, SourceRecords};
use gdp_scrape::specs::sources::Source;

fn set(source: Source, rows: &[(&str, f64, Option<i32>)]) -> SourceRecords {
    SourceRecords {
        source,
        records: rows
            .iter()
            .map(|&(c, gdp, year)| GdpRecord { country: c.to_string(), gdp, year, source })
            .collect(),
        dropped: 0,
    }
}

fn sample() -> (SourceRecords, SourceRecords) {
    let a = set(
        Source::Imf,
        &[("United States", 27_974_000.0, Some(2024)), ("Japan", 4_231_141.0, Some(2023)), ("Fiji", 5_494.0, None)],
    );
    let b = set(
        Source::WorldBank,
        &[("Japan", 4_213_000.0, Some(2022)), ("India", 3_385_090.0, Some(2022)), ("United States", 25_462_700.0, None)],
    );
    (a, b)
}

#[test]
fn join_then_project_round_trips() {
    let (a, b) = sample();
    let view = join(&[a.clone(), b.clone()]);
    assert_eq!(view.project(Source::Imf), a.records);
    assert_eq!(view.project(Source::WorldBank), b.records);
}

#[test]
fn join_order_and_zero_fill() {
    let (a, b) = sample();
    let view = join(&[a, b]);

    let order: Vec<&str> = view.rows.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(order, vec!["United States", "Japan", "Fiji", "India"]);
    assert_eq!(view.sources, vec![Source::Imf, Source::WorldBank]);

    let fiji = &view.rows[2];
    assert_eq!(fiji.values, vec![Some(5_494.0), None]);
    assert_eq!(fiji.value_or_zero(1), 0.0);
    assert_eq!(view.complete_rows().count(), 2);
}

#[test]
fn join_is_at_most_the_union() {
    let (a, b) = sample();
    let view = join(&[a, b]);
    assert!(view.len() <= 6);
    assert_eq!(view.len(), 4);
}

#[test]
fn project_unknown_source_is_empty() {
    let (a, _) = sample();
    let view = join(&[a]);
    assert!(view.project(Source::UnitedNations).is_empty());
}

#[test]
fn ranked_by_puts_missing_last() {
    let (a, b) = sample();
    let view = join(&[a, b]);
    let ranked: Vec<&str> = view.ranked_by(Source::WorldBank).iter().map(|r| r.country.as_str()).collect();
    assert_eq!(ranked, vec!["United States", "Japan", "India", "Fiji"]);
}

#[test]
fn continent_groups() {
    let (a, _) = sample();
    let mut recs = a.records.clone();
    recs.push(GdpRecord { country: "China".into(), gdp: 18_566_000.0, year: None, source: Source::Imf });
    recs.push(GdpRecord { country: "Atlantis".into(), gdp: 1.0, year: None, source: Source::Imf });

    let view = group_by_continent(&recs);
    let order: Vec<Continent> = view.groups.iter().map(|g| g.continent).collect();
    assert_eq!(
        order,
        vec![Continent::Asia, Continent::NorthAmerica, Continent::Oceania, Continent::Unclassified]
    );

    let asia = view.get(Continent::Asia).unwrap();
    assert_eq!(asia.members[0].0, "China");
    assert_eq!(asia.members[1].0, "Japan");
    assert_eq!(asia.total, 18_566_000.0 + 4_231_141.0);
    assert!(view.get(Continent::Europe).is_none());
    assert_eq!(view.grand_total(), recs.iter().map(|r| r.gdp).sum::<f64>());
}

#[test]
fn empty_inputs() {
    assert!(join(&[]).is_empty());
    assert!(group_by_continent(&[]).is_empty());
}
