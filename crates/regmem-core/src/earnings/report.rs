//! Aggregate statistics for a grammar dispatch run.

use serde::Serialize;

use super::classify::Category;
use super::grammar::ParseOutcome;

/// Per-category dispatch statistics.
///
/// Ambiguous parses are accepted lines (the grammar does recognize
/// them) but are tallied on their own, never folded into the clean
/// success count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Lines dispatched to this category.
    pub total: usize,
    /// Lines accepted by exactly one grammar form.
    pub success: usize,
    /// Lines accepted by more than one grammar form.
    pub ambiguous: usize,
    /// Rejected lines, in dispatch order, retained for export.
    pub failures: Vec<String>,
}

impl CategoryStats {
    /// Record one line's outcome. Rejected lines keep their
    /// preprocessed text for the failure export.
    pub fn record(&mut self, outcome: ParseOutcome, line: &str) {
        self.total += 1;
        match outcome {
            ParseOutcome::Success => self.success += 1,
            ParseOutcome::Ambiguous => self.ambiguous += 1,
            ParseOutcome::Failure => self.failures.push(line.to_string()),
        }
    }

    /// Lines the grammar accepted, ambiguously or not.
    pub fn accepted(&self) -> usize {
        self.success + self.ambiguous
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Accepted over total. NaN for an empty bucket, by contract.
    pub fn success_rate(&self) -> f64 {
        self.accepted() as f64 / self.total as f64
    }

    /// Fold another shard into this one. Commutative in counts;
    /// failure lists concatenate, so parallel shards change only the
    /// discovery order of failures.
    pub fn merge(&mut self, other: CategoryStats) {
        self.total += other.total;
        self.success += other.success;
        self.ambiguous += other.ambiguous;
        self.failures.extend(other.failures);
    }
}

/// Full report of one earnings dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EarningsReport {
    pub naked: CategoryStats,
    pub heading: CategoryStats,
    pub sub: CategoryStats,
}

impl EarningsReport {
    pub fn stats(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Naked => &self.naked,
            Category::Heading => &self.heading,
            Category::Sub => &self.sub,
        }
    }

    pub fn stats_mut(&mut self, category: Category) -> &mut CategoryStats {
        match category {
            Category::Naked => &mut self.naked,
            Category::Heading => &mut self.heading,
            Category::Sub => &mut self.sub,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.stats(*c).total).sum()
    }

    pub fn accepted(&self) -> usize {
        Category::ALL.iter().map(|c| self.stats(*c).accepted()).sum()
    }

    /// Ambiguity count across all categories in the run.
    pub fn ambiguous(&self) -> usize {
        Category::ALL.iter().map(|c| self.stats(*c).ambiguous).sum()
    }

    /// Overall accepted-over-total rate; NaN when nothing was dispatched.
    pub fn success_rate(&self) -> f64 {
        self.accepted() as f64 / self.total() as f64
    }

    pub fn merge(&mut self, other: EarningsReport) {
        self.naked.merge(other.naked);
        self.heading.merge(other.heading);
        self.sub.merge(other.sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_bucket_rate_is_nan() {
        let stats = CategoryStats::default();
        assert!(stats.success_rate().is_nan());
        assert!(EarningsReport::default().success_rate().is_nan());
    }

    #[test]
    fn test_record_and_rate() {
        let mut stats = CategoryStats::default();
        stats.record(ParseOutcome::Success, "a");
        stats.record(ParseOutcome::Ambiguous, "b");
        stats.record(ParseOutcome::Failure, "c");
        stats.record(ParseOutcome::Failure, "d");

        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 1);
        assert_eq!(stats.ambiguous, 1);
        assert_eq!(stats.accepted(), 2);
        assert_eq!(stats.failures, vec!["c", "d"]);
        assert_eq!(stats.success_rate(), 0.5);
    }

    #[test]
    fn test_merge_is_order_insensitive_in_counts() {
        let mut a = CategoryStats::default();
        a.record(ParseOutcome::Success, "a");
        a.record(ParseOutcome::Failure, "x");

        let mut b = CategoryStats::default();
        b.record(ParseOutcome::Ambiguous, "b");
        b.record(ParseOutcome::Failure, "y");

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab.total, ba.total);
        assert_eq!(ab.success, ba.success);
        assert_eq!(ab.ambiguous, ba.ambiguous);
        assert_eq!(ab.failed(), ba.failed());
        // Only discovery order differs.
        let mut lhs = ab.failures.clone();
        let mut rhs = ba.failures.clone();
        lhs.sort();
        rhs.sort();
        assert_eq!(lhs, rhs);
    }
}
