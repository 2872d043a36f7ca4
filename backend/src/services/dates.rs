//! Lenient date parsing for spreadsheet cells.
//!
//! Spreadsheet authors type dates however they like. We accept a fixed list of
//! formats and take the first that parses, so an ambiguous value such as
//! `03/04/2025` always resolves day-first.

use chrono::NaiveDate;

/// Accepted input formats, in priority order.
pub const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%m-%d-%Y"];

/// Canonical output format for timetable keys.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Parse `raw` with the first matching entry of [`DATE_FORMATS`].
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .filter(|fmt| has_four_digit_year(raw, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// chrono's `%Y` also takes 1-3 digit and signed years; only `YYYY` is a date here.
fn has_four_digit_year(raw: &str, fmt: &str) -> bool {
    let Some(sep) = fmt.chars().find(|c| *c == '-' || *c == '/') else {
        return false;
    };
    let Some(position) = fmt.split(sep).position(|part| part == "%Y") else {
        return false;
    };
    raw.split(sep)
        .nth(position)
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse `raw` and render it as a `YYYY-MM-DD` key.
pub fn canonical_date_key(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format(CANONICAL_FORMAT).to_string())
}
