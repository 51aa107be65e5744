//! Monetary value extraction for gift descriptions.
//!
//! The value field is free text and frequently states a breakdown
//! ("£1,350 (£225 per person)") where only the aggregate figure is the
//! donation value, so a lone amount is trusted but multiple amounts
//! need an explicit total qualifier.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::patterns::{IN_TOTAL, MONEY_PATTERN, TOTAL_VALUE};
use crate::gifts::overrides::OverrideTable;

/// Result of value extraction over one description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOutcome {
    /// A single GBP amount was resolved.
    Amount(Decimal),
    /// The description is known to carry no monetary value by design.
    NonMonetary,
    /// No rule resolved the text; reported for manual curation, never
    /// guessed at.
    Unresolved,
}

impl ValueOutcome {
    pub fn amount(&self) -> Option<Decimal> {
        match *self {
            ValueOutcome::Amount(v) => Some(v),
            _ => None,
        }
    }
}

/// Resolve the donation value from a free-text description.
///
/// Layered: a single amount mention wins outright; otherwise an
/// explicit "total value" / "in total" qualifier picks the aggregate;
/// otherwise per-unit breakdown mentions ("£225 per person") are
/// discarded and a lone surviving aggregate wins; otherwise the
/// literal override table is consulted for this exact text.
pub fn extract_value(text: &str, overrides: &OverrideTable) -> ValueOutcome {
    let amounts: Vec<regex::Match<'_>> = MONEY_PATTERN.find_iter(text).collect();
    if amounts.len() == 1 {
        return ValueOutcome::Amount(fixed_point(amounts[0].as_str()));
    }

    for qualifier in [&*TOTAL_VALUE, &*IN_TOTAL] {
        if let Some(caps) = qualifier.captures(text) {
            return ValueOutcome::Amount(fixed_point(&caps[1]));
        }
    }

    // "£1,350.00 (£225 per person)": the per-unit mention is a
    // breakdown, the remaining figure is the donation value.
    let aggregates: Vec<&regex::Match<'_>> = amounts
        .iter()
        .filter(|m| !is_per_unit(text, m.end()))
        .collect();
    if aggregates.len() == 1 {
        return ValueOutcome::Amount(fixed_point(aggregates[0].as_str()));
    }

    if let Some(value) = overrides.value_for(text) {
        return match value {
            Some(amount) => ValueOutcome::Amount(amount),
            None => ValueOutcome::NonMonetary,
        };
    }

    debug!(text, "no resolvable monetary value");
    ValueOutcome::Unresolved
}

/// Whether the amount ending at `end` is a per-unit breakdown mention.
fn is_per_unit(text: &str, end: usize) -> bool {
    let rest = text[end..].trim_start();
    rest.starts_with("per ") || rest.starts_with("each")
}

/// Parse a matched GBP amount into a fixed-precision decimal.
///
/// Only called on text the money pattern already matched.
fn fixed_point(money: &str) -> Decimal {
    let cleaned = money.trim_start_matches('£').replace(',', "");
    Decimal::from_str(&cleaned).unwrap_or_default()
}
