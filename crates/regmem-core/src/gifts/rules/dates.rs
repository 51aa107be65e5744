//! Date and date-range extraction for gift entries.
//!
//! Unlike money extraction this fails loud: every gift record is
//! expected to carry at least one resolvable date, and silently losing
//! one is worse than dropping the entry to the failure set.

use chrono::NaiveDate;

use super::patterns::{DATE_RANGE, DAY_RANGE};
use crate::error::ExtractionError;
use crate::models::DateValue;
use crate::preprocess::REGISTER_DATE_FORMAT;

/// Descriptive suffixes that must be stripped before date parsing.
const STRIP_SUFFIXES: &[&str] = &[" (start date of loan)"];

/// Literal corrections for individually enumerable source typos, e.g.
/// a stray trailing digit in one member's December 2021 entry.
const CORRECTIONS: &[(&str, &str)] = &[("22 November 20201", "22 November 2021")];

/// Extract a single date or closed date range from a text fragment.
pub fn extract_date(date_str: &str) -> Result<DateValue, ExtractionError> {
    // "3-5 October 2021": day range within one month.
    if let Some(caps) = DAY_RANGE.captures(date_str) {
        let start = parse_single(&format!("{} {}", &caps[1], &caps[3]), date_str)?;
        let end = parse_single(&format!("{} {}", &caps[2], &caps[3]), date_str)?;
        return DateValue::range(start, end);
    }

    let mut date_str = date_str;
    for suffix in STRIP_SUFFIXES {
        date_str = date_str.strip_suffix(suffix).unwrap_or(date_str);
    }
    let date_str = CORRECTIONS
        .iter()
        .find(|(typo, _)| *typo == date_str)
        .map(|(_, fixed)| *fixed)
        .unwrap_or(date_str);

    if let Ok(date) = NaiveDate::parse_from_str(date_str, REGISTER_DATE_FORMAT) {
        return Ok(DateValue::Single(date));
    }

    // "3 October 2021 - 5 October 2021" and "... to ..." variants.
    if let Some(caps) = DATE_RANGE.captures(date_str) {
        let start = parse_single(&caps[1], date_str)?;
        let end = parse_single(&caps[2], date_str)?;
        return DateValue::range(start, end);
    }

    Err(ExtractionError::Date(date_str.to_string()))
}

fn parse_single(text: &str, original: &str) -> Result<NaiveDate, ExtractionError> {
    NaiveDate::parse_from_str(text, REGISTER_DATE_FORMAT)
        .map_err(|_| ExtractionError::Date(original.to_string()))
}
