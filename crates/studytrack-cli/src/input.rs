//! Parsing of raw text typed by the user.
//!
//! Nothing here fails: input that cannot be parsed falls back to a default.

use anyhow::Result;
use chrono::NaiveDate;
use studytrack_core::exam::WORKBOOK_TASKS;

/// Parses an integer, trimming whitespace. Anything else becomes 0.
pub fn parse_int_input(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Like [`parse_int_input`] but for counts such as ECTS: negatives become 0.
pub fn parse_count_input(raw: &str) -> u32 {
    u32::try_from(parse_int_input(raw)).unwrap_or(0)
}

/// Parses a `YYYY-MM-DD` date, falling back to `fallback` when the input is
/// empty or invalid.
pub fn parse_date_input(raw: &str, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or(fallback)
}

/// Checks that exactly one score per workbook task was given.
pub fn workbook_tasks(values: &[i64]) -> Result<[i64; WORKBOOK_TASKS]> {
    <[i64; WORKBOOK_TASKS]>::try_from(values).map_err(|_| {
        anyhow::anyhow!(
            "expected {WORKBOOK_TASKS} task scores, got {}",
            values.len()
        )
    })
}
