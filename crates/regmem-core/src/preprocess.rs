//! Entry text preprocessing shared by both pipelines.
//!
//! Register entries carry a parenthetical registration annotation
//! ("(Registered 04 November 2021)", sometimes with an update date) and
//! occasionally a late-notification disclaimer sentence. Both are
//! boilerplate added by the register clerks, not part of the disclosure
//! itself, and are stripped before any parsing.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

/// Date format used throughout the register: "4 November 2021".
pub const REGISTER_DATE_FORMAT: &str = "%d %B %Y";

lazy_static! {
    static ref REGISTRATION: Regex = Regex::new(
        r"\((?:Registered|Updated|First registered) (\d{1,2} [A-Z][a-z]+ \d{4})(?:.+?(\d{1,2} [A-Z][a-z]+ \d{4}))??\)"
    )
    .unwrap();

    static ref LATE_NOTICE: Regex = Regex::new(r"This is a late .+").unwrap();
}

/// Strip the registration/update annotation from an entry, returning the
/// cleaned text and any dates the annotation carried (zero, one or two).
///
/// Idempotent: already-clean text comes back unchanged with no dates.
/// An annotation date that fails to parse is dropped with a warning
/// rather than failing the entry.
pub fn strip_registration_date(entry: &str) -> (String, Vec<NaiveDate>) {
    let mut dates = Vec::new();
    let Some(caps) = REGISTRATION.captures(entry) else {
        return (entry.to_string(), dates);
    };

    for group in [caps.get(1), caps.get(2)].into_iter().flatten() {
        match NaiveDate::parse_from_str(group.as_str(), REGISTER_DATE_FORMAT) {
            Ok(date) => dates.push(date),
            Err(err) => {
                warn!(text = group.as_str(), %err, "unparseable registration date");
            }
        }
    }

    let stripped = REGISTRATION.replace_all(entry, "");
    (stripped.trim_end().to_string(), dates)
}

/// Strip a trailing "This is a late ..." disclaimer sentence.
///
/// Idempotent; text without the disclaimer passes through unchanged.
pub fn strip_late_notice(entry: &str) -> String {
    if !LATE_NOTICE.is_match(entry) {
        return entry.to_string();
    }
    LATE_NOTICE.replace_all(entry, "").trim_end().to_string()
}
