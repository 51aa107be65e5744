//! Employment and earnings pipeline: classify, preprocess, grammar
//! dispatch, report.

pub mod classify;
pub mod grammar;
pub mod report;

pub use classify::{classify_section, Category, LineBuckets};
pub use grammar::{parse_line, ParseOutcome};
pub use report::{CategoryStats, EarningsReport};

use tracing::{debug, info};

use crate::models::register::{Register, EMPLOYMENT_SECTION};
use crate::preprocess::{strip_late_notice, strip_registration_date};

/// Run the full earnings pipeline over a register.
pub fn run(register: &Register) -> EarningsReport {
    let mut buckets = LineBuckets::default();
    for section in register.sections(EMPLOYMENT_SECTION) {
        buckets.extend(classify_section(&section.entries));
    }
    info!(lines = buckets.total(), "dispatching earnings lines");
    dispatch(&buckets)
}

/// Dispatch pre-classified line buckets to their category grammars.
pub fn dispatch(buckets: &LineBuckets) -> EarningsReport {
    let mut report = EarningsReport::default();
    for category in Category::ALL {
        let stats = report.stats_mut(category);
        for line in buckets.bucket(category) {
            let (line, _) = strip_registration_date(line);
            let line = strip_late_notice(&line);
            let outcome = parse_line(category, &line);
            stats.record(outcome, &line);
        }
        debug!(
            category = %category,
            total = stats.total,
            accepted = stats.accepted(),
            "category dispatched"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_preprocesses_and_counts() {
        let buckets = LineBuckets {
            naked: vec![
                "8 December 2021, received £600 from the BBC, Broadcasting House. Hours: 4 hrs. (Registered 14 December 2021)".to_string(),
                "A narrative sentence no grammar accepts.".to_string(),
            ],
            heading: vec!["Payments from ComRes, Four Millbank, London SW1P 3JA:".to_string()],
            sub: vec![],
        };

        let report = dispatch(&buckets);
        assert_eq!(report.naked.total, 2);
        assert_eq!(report.naked.success, 1);
        assert_eq!(
            report.naked.failures,
            vec!["A narrative sentence no grammar accepts."]
        );
        assert_eq!(report.heading.success, 1);
        assert!(report.sub.success_rate().is_nan());
        assert_eq!(report.total(), 3);
    }
}
