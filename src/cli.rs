// src/cli.rs
//
// Text front-end: same pipeline as the GUI, views printed to stdout.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{self, WrapErr};

use crate::{
    aggregate::JoinedView,
    chart::{comparison_chart, continent_chart},
    config::{
        consts::{CACHE_TTL_SECS, DEFAULT_TOP_N, DEFAULT_URL, MAX_ZOOM, TABLE_MARKER},
        options::{ExportFormat, ScrapeOptions},
    },
    core::{cache::FetchCache, net::{Fetch, HttpFetcher}},
    csv,
    data::{self, DataSet},
    log::{self, Console},
    map::MapView,
    present::{self, NO_DATA},
    progress::Progress,
    scrape::{self, Report},
    specs::sources::Source,
};

const BAR_WIDTH: usize = 40;
const MAP_COLS: usize = 73;
const MAP_ROWS: usize = 25;

#[derive(Parser, Debug)]
#[command(name = "gdp_scrape")]
#[command(about = "Scrape GDP-by-country tables and print them as tables, bars or a map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Page to scrape
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    pub url: String,

    /// CSS selector for candidate tables
    #[arg(long, global = true, default_value = TABLE_MARKER)]
    pub marker: String,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Records of one source: country, continent, GDP, year
    Table(ViewArgs),
    /// Top countries side by side across all sources
    Compare(ViewArgs),
    /// Totals per continent for one source
    Continents(ViewArgs),
    /// Single-marker coordinate map
    Map(MapArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// imf | worldbank | un
    #[arg(short, long, default_value = "imf", value_parser = parse_source)]
    pub source: Source,

    /// Countries shown (compare: bars, continents: named members per bar)
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    #[arg(short, long, value_enum, default_value_t = OutFormat::Text)]
    pub format: OutFormat,
}

#[derive(Args, Debug)]
pub struct MapArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lon: f64,

    /// 0 = whole world
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=MAX_ZOOM as i64))]
    pub zoom: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutFormat {
    Text,
    Csv,
    Tsv,
}

impl OutFormat {
    fn export(self) -> Option<ExportFormat> {
        match self {
            OutFormat::Text => None,
            OutFormat::Csv => Some(ExportFormat::Csv),
            OutFormat::Tsv => Some(ExportFormat::Tsv),
        }
    }
}

fn parse_source(s: &str) -> Result<Source, String> {
    Source::from_key(s).ok_or_else(|| format!("unknown source `{s}` (expected imf, worldbank or un)"))
}

#[derive(Clone, Copy)]
enum ViewKind {
    Table,
    Compare,
    Continents,
}

/// Status lines on stderr so stdout stays clean for piping.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        eprintln!("  {label}: ok");
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        eprintln!("  {label}: {reason}");
    }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    let _guard = log::init(Console::Stderr, cli.verbose > 0);

    let fetcher = HttpFetcher::new().wrap_err("building HTTP client")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&cli, &fetcher, None, &mut out)
}

/// Execute one command. `progress` defaults to stderr status lines.
pub fn run_with(
    cli: &Cli,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    let (kind, view) = match &cli.command {
        Command::Map(m) => {
            let map = MapView::single(m.lat, m.lon, m.zoom)?;
            out.write_all(present::render_map(&map, MAP_COLS, MAP_ROWS).as_bytes())?;
            return Ok(());
        }
        Command::Table(v) => (ViewKind::Table, v),
        Command::Compare(v) => (ViewKind::Compare, v),
        Command::Continents(v) => (ViewKind::Continents, v),
    };

    let opts = ScrapeOptions {
        url: cli.url.clone(),
        marker: cli.marker.clone(),
        ..ScrapeOptions::default()
    };
    let mut cache = FetchCache::new(CACHE_TTL_SECS);
    let mut fallback = CliProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut fallback,
    };
    let report = scrape::run(&opts, &mut cache, fetcher, Some(progress))?;

    let text = match kind {
        ViewKind::Table => table_view(&report, view),
        ViewKind::Compare => compare_view(&report.joined(), view),
        ViewKind::Continents => continents_view(&report, view),
    };

    // Delimited output stays machine-readable; issues go to stderr instead.
    let issues = present::render_issues(&report.issues());
    if view.format == OutFormat::Text {
        out.write_all(issues.as_bytes())?;
    } else {
        eprint!("{issues}");
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn emit(ds: &DataSet, args: &ViewArgs, text: impl FnOnce(&DataSet) -> String) -> String {
    match args.format.export() {
        Some(fmt) => csv::to_export_string(&ds.headers, &ds.rows, true, fmt.delim()),
        None => text(ds),
    }
}

fn table_view(report: &Report, args: &ViewArgs) -> String {
    let Some(set) = report.records(args.source) else {
        return join!(NO_DATA, "\n");
    };
    let ds = data::records_dataset(set);
    emit(&ds, args, |ds| {
        let mut shown = ds.clone();
        if let Some(ix) = shown.column("GDP") {
            for row in &mut shown.rows {
                if let Ok(v) = row[ix].parse::<f64>() {
                    row[ix] = present::format_gdp(v);
                }
            }
        }
        present::render_table(&shown)
    })
}

fn compare_view(joined: &JoinedView, args: &ViewArgs) -> String {
    let ds = data::joined_dataset(joined);
    emit(&ds, args, |_| {
        present::render_bars(&comparison_chart(joined, args.source, args.top), BAR_WIDTH)
    })
}

fn continents_view(report: &Report, args: &ViewArgs) -> String {
    let Some(view) = report.by_continent(args.source) else {
        return join!(NO_DATA, "\n");
    };
    let ds = data::continent_dataset(&view);
    emit(&ds, args, |ds| {
        let bars = present::render_bars(&continent_chart(&view, args.source, args.top), BAR_WIDTH);
        join!(&bars, "\n", &present::render_table(ds))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::RawPage;
    use crate::error::Result as GdpResult;

    const PAGE: &str = r#"<html><body>
        <table class="wikitable"><tr><th>Country</th><th>IMF estimate</th></tr>
          <tr><td>Japan</td><td>4,231,141</td></tr>
          <tr><td>Fiji</td><td>5,494</td></tr></table>
        <table class="wikitable"><tr><th>Country</th><th>World Bank</th></tr>
          <tr><td>Japan</td><td>4,213,000</td></tr></table>
        </body></html>"#;

    struct Fixture;
    impl Fetch for Fixture {
        fn fetch(&self, url: &str) -> GdpResult<RawPage> {
            Ok(RawPage::new(url, PAGE))
        }
    }

    struct Quiet;
    impl Progress for Quiet {}

    fn exec(args: &[&str]) -> eyre::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("gdp_scrape").chain(args.iter().copied()))?;
        let mut buf = Vec::new();
        run_with(&cli, &Fixture, Some(&mut Quiet), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn table_text() {
        let out = exec(&["table"]).unwrap();
        assert!(out.contains("! no table found for source United Nations"));
        assert!(out.contains("4,231,141"));
        assert!(out.contains("Oceania"));
    }

    #[test]
    fn table_csv_is_plain() {
        let out = exec(&["table", "--format", "csv"]).unwrap();
        assert_eq!(out, "Country,Continent,GDP,Year\nJapan,Asia,4231141,\nFiji,Oceania,5494,\n");
    }

    #[test]
    fn missing_source_degrades() {
        let out = exec(&["table", "-s", "un"]).unwrap();
        assert!(out.ends_with("No data to display\n"));
    }

    #[test]
    fn compare_tsv_blank_for_missing() {
        let out = exec(&["compare", "-f", "tsv"]).unwrap();
        assert_eq!(out, "Country\tIMF\tWorld Bank\nJapan\t4231141\t4213000\nFiji\t5494\t\n");
    }

    #[test]
    fn map_accepts_negative_longitude() {
        let out = exec(&["map", "--lat", "37.7749", "--lon", "-122.4194"]).unwrap();
        assert!(out.contains("Your location (37.7749, -122.4194)"));
    }

    #[test]
    fn map_rejects_out_of_range() {
        assert!(exec(&["map", "--lat", "91"]).is_err());
    }

    #[test]
    fn bad_source_is_a_usage_error() {
        assert!(Cli::try_parse_from(["gdp_scrape", "table", "--source", "oecd"]).is_err());
    }
}
