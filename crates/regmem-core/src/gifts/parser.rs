//! Gift entry parser: fixed schema with layered fallbacks.
//!
//! One entry walks at most four states: the fixed six-field schema,
//! the honorary-membership fallback, the exact-text override table,
//! and finally the unparsed list. Entry-level failures never halt a
//! run; they are collected for manual curation.

use chrono::NaiveDate;
use regex::Captures;
use tracing::{debug, warn};

use super::overrides::{GiftOverride, OverrideTable};
use super::rules::patterns::{GIFT_SCHEMA, HONORARY_MARKER, HONORARY_MEMBERSHIP};
use super::rules::{extract_date, extract_value, ValueOutcome};
use crate::error::{ExtractionError, ResourceError};
use crate::models::{DateValue, Entry, Gift};
use crate::preprocess::{strip_registration_date, REGISTER_DATE_FORMAT};

/// Parser for one register edition's gift entries.
pub struct GiftParser {
    overrides: OverrideTable,
}

/// Terminal state of one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    /// A structured record was produced. `value_unresolved` marks a
    /// record kept with a missing value that needs curation.
    Parsed {
        gift: Box<Gift>,
        value_unresolved: bool,
    },
    /// The override table names this entry as intentionally
    /// value-less; no record is produced and none is owed.
    NonMonetary,
    /// No state recovered the entry; the preprocessed text is kept.
    Unparsed(String),
}

/// Accumulated output of a gift extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftReport {
    /// Successfully constructed records, in source order.
    pub gifts: Vec<Gift>,
    /// Entries the override table marked as intentionally value-less.
    pub non_monetary: Vec<String>,
    /// Entries no state recovered, for manual curation.
    pub unparsed: Vec<String>,
    /// Value-field texts that resolved to no amount; the records were
    /// still kept.
    pub value_failures: Vec<String>,
}

impl GiftReport {
    pub fn total(&self) -> usize {
        self.gifts.len() + self.non_monetary.len() + self.unparsed.len()
    }

    /// Fold another shard into this one; counts are order-insensitive.
    pub fn merge(&mut self, other: GiftReport) {
        self.gifts.extend(other.gifts);
        self.non_monetary.extend(other.non_monetary);
        self.unparsed.extend(other.unparsed);
        self.value_failures.extend(other.value_failures);
    }
}

impl GiftParser {
    /// Parser with the override table shipped in the crate.
    pub fn new() -> Result<Self, ResourceError> {
        Ok(Self {
            overrides: OverrideTable::embedded()?,
        })
    }

    /// Parser with a swapped-in override table.
    pub fn with_overrides(overrides: OverrideTable) -> Self {
        Self { overrides }
    }

    /// Process every entry of a gift section. Heading entries
    /// contribute their heading and sub texts as separate entries.
    pub fn parse_section(&self, entries: &[Entry]) -> GiftReport {
        let mut report = GiftReport::default();
        for entry in entries {
            match entry {
                Entry::Naked(text) => self.drive(text, &mut report),
                Entry::Heading { text, subs } => {
                    self.drive(text, &mut report);
                    for sub in subs {
                        self.drive(sub, &mut report);
                    }
                }
            }
        }
        report
    }

    fn drive(&self, raw: &str, report: &mut GiftReport) {
        match self.parse_entry(raw) {
            EntryOutcome::Parsed {
                gift,
                value_unresolved,
            } => {
                if value_unresolved {
                    report.value_failures.push(gift.content.clone());
                }
                report.gifts.push(*gift);
            }
            EntryOutcome::NonMonetary => report.non_monetary.push(raw.to_string()),
            EntryOutcome::Unparsed(text) => report.unparsed.push(text),
        }
    }

    /// Run one raw entry through the state machine.
    pub fn parse_entry(&self, raw: &str) -> EntryOutcome {
        let (text, registered) = strip_registration_date(raw);

        // State A: fixed six-field schema.
        if let Some(caps) = GIFT_SCHEMA.captures(&text) {
            match self.schema_gift(&caps, &registered) {
                Ok(outcome) => return outcome,
                // A date failure drops the entry out of state A; the
                // override table may still know it.
                Err(err) => debug!(entry = raw, %err, "schema entry lost a date field"),
            }
        }

        // State B: honorary club membership, a genuinely
        // non-transactional benefit with only an acceptance date.
        if HONORARY_MARKER.is_match(&text) {
            if let Some(caps) = HONORARY_MEMBERSHIP.captures(&text) {
                if let Ok(accepted) =
                    NaiveDate::parse_from_str(&caps["date"], REGISTER_DATE_FORMAT)
                {
                    return EntryOutcome::Parsed {
                        gift: Box::new(Gift {
                            donor_name: caps["club"].trim().to_string(),
                            donor_address: None,
                            content: "Honorary membership".to_string(),
                            value: None,
                            date_received: None,
                            date_accepted: Some(DateValue::Single(accepted)),
                            donor_status: "private members' club".to_string(),
                            registered,
                        }),
                        value_unresolved: false,
                    };
                }
            }
        }

        // State C: exact-text override.
        if let Some(overridden) = self.overrides.entry_for(&text) {
            return match overridden {
                GiftOverride::Record { gift } => {
                    let mut gift = gift.clone();
                    if gift.registered.is_empty() {
                        gift.registered = registered;
                    }
                    EntryOutcome::Parsed {
                        gift: Box::new(gift),
                        value_unresolved: false,
                    }
                }
                GiftOverride::NonMonetary => EntryOutcome::NonMonetary,
            };
        }

        // State D: unrecovered.
        warn!(entry = %text, "gift entry not recovered by any state");
        EntryOutcome::Unparsed(text)
    }

    fn schema_gift(
        &self,
        caps: &Captures,
        registered: &[NaiveDate],
    ) -> Result<EntryOutcome, ExtractionError> {
        let content = caps[3].trim().to_string();
        let value = extract_value(&content, &self.overrides);
        let date_received = extract_date(caps[4].trim())?;
        let date_accepted = extract_date(caps[5].trim())?;

        let donor_address = match caps[2].trim() {
            "" => None,
            addr => Some(addr.to_string()),
        };

        let value_unresolved = value == ValueOutcome::Unresolved;
        Ok(EntryOutcome::Parsed {
            gift: Box::new(Gift {
                donor_name: caps[1].trim().to_string(),
                donor_address,
                content,
                value: value.amount(),
                date_received: Some(date_received),
                date_accepted: Some(date_accepted),
                donor_status: caps[6].trim().to_string(),
                registered: registered.to_vec(),
            }),
            value_unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn schema_entry() -> String {
        "Name of donor: Acme Ltd\n\
         Address of donor: 1 Example Street, London\n\
         Amount of donation or nature and value if benefit in kind: £1,350.00 (£225 per person)\n\
         Date received: 3-5 October 2021\n\
         Date accepted: 3 October 2021\n\
         Donor status: company, registration 01234567\n\
         (Registered 14 October 2021)"
            .to_string()
    }

    #[test]
    fn test_state_a_schema_entry() {
        let parser = GiftParser::new().unwrap();
        let outcome = parser.parse_entry(&schema_entry());

        let EntryOutcome::Parsed { gift, value_unresolved } = outcome else {
            panic!("expected a parsed record, got {outcome:?}");
        };
        assert!(!value_unresolved);
        assert_eq!(gift.donor_name, "Acme Ltd");
        assert_eq!(gift.donor_address.as_deref(), Some("1 Example Street, London"));
        assert_eq!(gift.value, Some(Decimal::from_str("1350.00").unwrap()));
        assert_eq!(
            gift.date_received,
            Some(DateValue::range(d(2021, 10, 3), d(2021, 10, 5)).unwrap())
        );
        assert_eq!(gift.date_accepted, Some(DateValue::Single(d(2021, 10, 3))));
        assert_eq!(gift.donor_status, "company, registration 01234567");
        assert_eq!(gift.registered, vec![d(2021, 10, 14)]);
    }

    #[test]
    fn test_state_a_keeps_record_on_unresolved_value() {
        let entry = "Name of donor: Acme Ltd\n\
                     Address of donor: 1 Example Street, London\n\
                     Amount of donation or nature and value if benefit in kind: £50 and £75\n\
                     Date received: 1 January 2021\n\
                     Date accepted: 1 January 2021\n\
                     Donor status: individual";

        let parser = GiftParser::new().unwrap();
        let EntryOutcome::Parsed { gift, value_unresolved } = parser.parse_entry(entry) else {
            panic!("expected a parsed record");
        };
        assert!(value_unresolved);
        assert_eq!(gift.value, None);
    }

    #[test]
    fn test_state_b_honorary_membership() {
        let entry = "Honorary membership of the Carlton Club, accepted 5 July 2021.";
        let parser = GiftParser::new().unwrap();

        let EntryOutcome::Parsed { gift, .. } = parser.parse_entry(entry) else {
            panic!("expected a parsed record");
        };
        assert_eq!(gift.donor_name, "the Carlton Club");
        assert_eq!(gift.value, None);
        assert_eq!(gift.date_received, None);
        assert_eq!(gift.date_accepted, Some(DateValue::Single(d(2021, 7, 5))));
        assert_eq!(gift.donor_status, "private members' club");
    }

    #[test]
    fn test_state_c_override_record() {
        let entry = "My spouse and I attended the Cheltenham Festival as guests of The Jockey Club, Cheltenham Racecourse, Prestbury, Cheltenham GL50 4SH on 18 March 2022. Transport, lunch and hospitality were provided, total value £1,100. (Registered 24 March 2022)";
        let parser = GiftParser::new().unwrap();

        let EntryOutcome::Parsed { gift, .. } = parser.parse_entry(entry) else {
            panic!("expected a parsed record");
        };
        assert_eq!(gift.donor_name, "The Jockey Club");
        assert_eq!(gift.value, Some(Decimal::from(1100)));
        // Registration dates stripped from the live text flow into the
        // pre-built record.
        assert_eq!(gift.registered, vec![d(2022, 3, 24)]);
    }

    #[test]
    fn test_state_c_non_monetary_sentinel() {
        let entry = "Annual honorary membership of Pratt's Club for the 2021-22 season";
        // No acceptance date, so state B cannot recover it either.
        let parser = GiftParser::new().unwrap();
        assert_eq!(parser.parse_entry(entry), EntryOutcome::NonMonetary);
    }

    #[test]
    fn test_state_d_unrecovered() {
        let parser = GiftParser::new().unwrap();
        let outcome = parser.parse_entry("A sentence that matches nothing at all.");
        assert_eq!(
            outcome,
            EntryOutcome::Unparsed("A sentence that matches nothing at all.".to_string())
        );
    }

    #[test]
    fn test_parse_section_flattens_headings() {
        let parser = GiftParser::new().unwrap();
        let entries = vec![
            Entry::Naked(schema_entry()),
            Entry::Heading {
                text: "A heading no state recovers:".to_string(),
                subs: vec!["Honorary membership of the Carlton Club, accepted 5 July 2021.".to_string()],
            },
        ];

        let report = parser.parse_section(&entries);
        assert_eq!(report.gifts.len(), 2);
        assert_eq!(report.unparsed, vec!["A heading no state recovers:"]);
        assert_eq!(report.total(), 3);
    }
}
