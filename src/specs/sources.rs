// src/specs/sources.rs
//! The fixed set of GDP-reporting organizations and how to recognize them.

use std::fmt;

use crate::core::sanitize::strip_brackets;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Imf,
    WorldBank,
    UnitedNations,
}

/// How a pattern is compared against a header cell.
#[derive(Clone, Copy, Debug)]
enum Pattern {
    /// Case-sensitive substring of the cell text.
    Contains(&'static str),
    /// Whole cell, after footnote brackets and whitespace are stripped.
    Exact(&'static str),
}

impl Source {
    /// Canonical order; every report and chart series follows it.
    pub const ALL: [Source; 3] = [Source::Imf, Source::WorldBank, Source::UnitedNations];

    pub fn label(&self) -> &'static str {
        match self {
            Source::Imf => "IMF",
            Source::WorldBank => "World Bank",
            Source::UnitedNations => "United Nations",
        }
    }

    /// Short lowercase key for CLI args.
    pub fn key(&self) -> &'static str {
        match self {
            Source::Imf => "imf",
            Source::WorldBank => "worldbank",
            Source::UnitedNations => "un",
        }
    }

    pub fn from_key(key: &str) -> Option<Source> {
        let k: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match k.as_str() {
            "imf" => Some(Source::Imf),
            "worldbank" | "wb" => Some(Source::WorldBank),
            "un" | "unitednations" => Some(Source::UnitedNations),
            _ => None,
        }
    }

    fn patterns(&self) -> &'static [Pattern] {
        use Pattern::*;
        match self {
            Source::Imf => &[Contains("IMF"), Contains("International Monetary Fund")],
            Source::WorldBank => &[Contains("World Bank")],
            // "UN region" is a column on the combined table; only the bare
            // abbreviation counts.
            Source::UnitedNations => &[Contains("United Nations"), Exact("UN")],
        }
    }

    /// Does this header/caption text name the organization?
    pub fn matches(&self, text: &str) -> bool {
        self.patterns().iter().any(|p| match p {
            Pattern::Contains(needle) => text.contains(needle),
            Pattern::Exact(word) => strip_brackets(text) == *word,
        })
    }

    /// First source (in canonical order) named by `text`.
    pub fn detect(text: &str) -> Option<Source> {
        Source::ALL.into_iter().find(|s| s.matches(text))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_org() {
        assert_eq!(Source::detect("IMF[1][13]"), Some(Source::Imf));
        assert_eq!(Source::detect("World Bank[14]"), Some(Source::WorldBank));
        assert_eq!(Source::detect("United Nations[15]"), Some(Source::UnitedNations));
        assert_eq!(Source::detect("UN[4]"), Some(Source::UnitedNations));
    }

    #[test]
    fn un_region_is_not_a_source() {
        assert_eq!(Source::detect("UN region"), None);
        assert_eq!(Source::detect("Country/Territory"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Source::detect("imf estimate"), None);
        assert_eq!(Source::detect("world bank"), None);
    }

    #[test]
    fn keys_round_trip() {
        for s in Source::ALL {
            assert_eq!(Source::from_key(s.key()), Some(s));
        }
        assert_eq!(Source::from_key("World-Bank"), Some(Source::WorldBank));
        assert_eq!(Source::from_key("oecd"), None);
    }
}
