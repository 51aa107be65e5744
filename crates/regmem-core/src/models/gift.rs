//! Structured gift and hospitality records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// A single calendar date or a closed date interval.
///
/// Some disclosures record a stay or event spanning several days; the
/// original text then carries a range rather than a point date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateValue {
    /// A single calendar date.
    Single(NaiveDate),
    /// A closed interval [start, end], start <= end.
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateValue {
    /// Build a closed interval, rejecting inverted endpoints.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, ExtractionError> {
        if start <= end {
            Ok(DateValue::Range { start, end })
        } else {
            Err(ExtractionError::InvertedRange { start, end })
        }
    }

    /// First day covered by this value.
    pub fn start(&self) -> NaiveDate {
        match *self {
            DateValue::Single(d) => d,
            DateValue::Range { start, .. } => start,
        }
    }

    /// Last day covered by this value.
    pub fn end(&self) -> NaiveDate {
        match *self {
            DateValue::Single(d) => d,
            DateValue::Range { end, .. } => end,
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Single(d)
    }
}

/// A fully extracted gift, benefit or hospitality record.
///
/// Constructed once per successfully parsed or overridden entry and not
/// mutated afterwards. Amounts are GBP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    /// Name of the donor.
    pub donor_name: String,

    /// Address of the donor, when disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_address: Option<String>,

    /// Free-text description of the donation or benefit in kind.
    pub content: String,

    /// Monetary value. Absent for genuinely non-monetizable benefits
    /// (honorary memberships and the like).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// Date the gift was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_received: Option<DateValue>,

    /// Date the gift was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_accepted: Option<DateValue>,

    /// Donor status line as published (individual, company, private
    /// members' club, ...). Logically a closed set per the register's
    /// rules, but free text in the source.
    pub donor_status: String,

    /// Registration and update dates stripped from the entry text.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub registered: Vec<NaiveDate>,
}
