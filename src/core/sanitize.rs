// src/core/sanitize.rs
//
// Cell-text cleaning: whitespace, footnote brackets, numeric coercion.

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove any `[ ... ]` bracket tags (e.g. `[12]`, `[note 1]`, `[n 3]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Display name for a country cell: footnotes and trailing markers dropped.
pub fn clean_country(s: &str) -> String {
    let s = strip_brackets(s);
    let s = s.trim_end_matches(|c: char| matches!(c, '*' | '†' | '‡') || c.is_whitespace());
    s.trim().to_string()
}

fn is_currency(c: char) -> bool {
    matches!(c, '$' | '€' | '£' | '¥' | '₹' | '₩' | '₽' | '¢' | '₺' | '₫' | '₱' | '₦' | '₪' | '฿')
}

fn is_space_sep(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}' | '\u{2009}')
}

/// Exactly three digits starting at `at`, then a non-digit or the end.
fn is_thousands_group(chars: &[char], at: usize) -> bool {
    let group = chars.get(at..at + 3);
    let full = group.is_some_and(|g| g.iter().all(|c| c.is_ascii_digit()));
    full && !chars.get(at + 3).is_some_and(|c| c.is_ascii_digit())
}

/// Coerce a formatted GDP cell to a number.
///
/// Accepts an optional prefix of whitespace, currency symbols and up to three
/// capital letters (`US$`), then a number with `,` / `'` / space thousands
/// separators. Whatever follows the number (`(2023)`, `million`) is ignored.
/// Returns `None` for cells without digits and for negative values.
///
/// `"$1,234,567[12]"` → `Some(1234567.0)`; `"N/A"` → `None`.
pub fn parse_number(cell: &str) -> Option<f64> {
    let cleaned = strip_brackets(cell);
    let chars: Vec<char> = cleaned.chars().collect();

    let mut i = 0usize;
    let mut letters = 0usize;
    while i < chars.len() && !chars[i].is_ascii_digit() {
        let c = chars[i];
        if c == '-' || c == '\u{2212}' {
            return None;
        }
        if c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()) {
            break;
        }
        if c.is_ascii_uppercase() {
            letters += 1;
            if letters > 3 { return None; }
        } else if !(c.is_whitespace() || is_currency(c) || c == '~' || c == '≈') {
            return None;
        }
        i += 1;
    }

    let mut body = String::new();
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            body.push(c);
        } else if c == ',' || c == '\'' {
            if !chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()) { break; }
        } else if is_space_sep(c) {
            if !is_thousands_group(&chars, i + 1) { break; }
        } else {
            break;
        }
        i += 1;
    }

    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    // "1.234.567" style grouping
    let body = if body.matches('.').count() > 1 { body.replace('.', "") } else { body };
    let v: f64 = body.parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// First run of exactly four digits, e.g. `"2023[n 1]"` → `Some(2023)`.
pub fn parse_year(cell: &str) -> Option<i32> {
    let s = strip_brackets(cell);
    let mut run = String::new();
    for ch in s.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else {
            if run.len() == 4 {
                return run.parse().ok();
            }
            run.clear();
        }
    }
    None
}
