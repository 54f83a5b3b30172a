//! Narrow date parsing for profile date ranges ("Jan 2020 - Present").
//!
//! Only three-letter English month abbreviations followed by a four-digit
//! year are recognized. Everything else is unsupported and returns `None`.

use chrono::NaiveDate;

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const OPEN_ENDED: &[&str] = &["present", "current", "now"];

const RANGE_SEPARATORS: &[&str] = &[" - ", " – ", " — "];

/// Provider exports append a duration after the range: `"Jan 2020 - Present · 4 yrs"`.
const DURATION_MARKER: char = '·';

/// Parses `"Mon YYYY"` to the first day of that month, or an open-ended
/// marker (`Present`) to `today`.
pub fn try_parse_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.trim();
    if OPEN_ENDED.iter().any(|m| text.eq_ignore_ascii_case(m)) {
        return Some(today);
    }

    let mut parts = text.split_whitespace();
    let (month, year) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let month = month.strip_suffix('.').unwrap_or(month).to_ascii_lowercase();
    let month = MONTHS.iter().position(|m| *m == month)? as u32 + 1;

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Splits a `"Start - End"` string into its two halves, dropping any
/// trailing duration.
pub fn split_range(text: &str) -> Option<(&str, &str)> {
    let text = text.split(DURATION_MARKER).next().unwrap_or(text);
    RANGE_SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .map(|(start, end)| (start.trim(), end.trim()))
}

/// Parses only the start of a date range. Used for chronological ordering.
pub fn parse_range_start(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (start, _) = split_range(text)?;
    try_parse_date(start, today)
}

/// Parses both ends of a date range. Ranges ending before they start are rejected.
pub fn parse_range(text: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = split_range(text)?;
    let start = try_parse_date(start, today)?;
    let end = try_parse_date(end, today)?;
    (end >= start).then_some((start, end))
}

/// Length of a range in years, using a 365-day year.
pub fn range_years(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / 365.0
}
