//! Gifts, benefits and hospitality pipeline: fixed-schema parsing with
//! layered heuristic extractors and a curated override table.

pub mod overrides;
pub mod parser;
pub mod rules;

pub use overrides::{GiftOverride, OverrideTable};
pub use parser::{EntryOutcome, GiftParser, GiftReport};

use tracing::info;

use crate::models::register::{Register, GIFTS_SECTION};

/// Run the full gift pipeline over a register.
pub fn run(register: &Register, parser: &GiftParser) -> GiftReport {
    let mut report = GiftReport::default();
    for section in register.sections(GIFTS_SECTION) {
        report.merge(parser.parse_section(&section.entries));
    }
    info!(
        gifts = report.gifts.len(),
        unparsed = report.unparsed.len(),
        "gift pipeline finished"
    );
    report
}
