//! Curated override table for entries that defy every general rule.
//!
//! The register's long tail contains syntactically unique narrative
//! sentences that will never be worth encoding as grammar or regex
//! rules. Those are handled by an exact-text lookup table shipped as a
//! versioned JSON resource next to the code, so curating a newly
//! discovered irregular entry means editing data, not extraction logic.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ResourceError;
use crate::models::Gift;

/// Default table shipped with the crate.
const EMBEDDED: &str = include_str!("../../resources/overrides.json");

/// Override for one full entry text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GiftOverride {
    /// A fully pre-built record for this entry.
    Record { gift: Gift },
    /// The entry is known non-monetary and intentionally yields no
    /// record at all.
    NonMonetary,
}

/// Static, read-only exception table, keyed by exact text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideTable {
    /// Value-field texts that the layered money extractor cannot
    /// resolve; `null` marks a known non-monetary value.
    #[serde(default)]
    values: HashMap<String, Option<Decimal>>,

    /// Full entry texts mapped to pre-built outcomes.
    #[serde(default)]
    entries: HashMap<String, GiftOverride>,
}

impl OverrideTable {
    /// Load the table shipped with the crate.
    pub fn embedded() -> Result<Self, ResourceError> {
        Self::parse(EMBEDDED, "<embedded>")
    }

    /// Load a table from an external file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, path: &str) -> Result<Self, ResourceError> {
        serde_json::from_str(content).map_err(|source| ResourceError::Corrupt {
            path: path.to_string(),
            source,
        })
    }

    /// Build a table from value overrides only (mainly for tests).
    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<Decimal>)>,
    {
        Self {
            values: values.into_iter().collect(),
            entries: HashMap::new(),
        }
    }

    /// Exact lookup of a value-field text. Outer `None` means no
    /// override; inner `None` means known non-monetary.
    pub fn value_for(&self, text: &str) -> Option<Option<Decimal>> {
        self.values.get(text.trim()).copied()
    }

    /// Exact lookup of a full entry text.
    pub fn entry_for(&self, text: &str) -> Option<&GiftOverride> {
        self.entries.get(text.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_loads() {
        let table = OverrideTable::embedded().unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_exact_match_only() {
        let table = OverrideTable::with_values([(
            "Two season tickets, total £380".to_string(),
            Some(Decimal::from(380)),
        )]);

        assert!(table.value_for("Two season tickets, total £380").is_some());
        // No substring or partial matching.
        assert!(table.value_for("Two season tickets").is_none());
        assert!(table.value_for("tickets, total £380").is_none());
    }

    #[test]
    fn test_corrupt_resource_is_fatal() {
        let err = OverrideTable::parse("{not json", "<test>").unwrap_err();
        assert!(matches!(err, ResourceError::Corrupt { .. }));
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let table = OverrideTable::embedded().unwrap();
        let key = "Annual honorary membership of Pratt's Club for the 2021-22 season";
        assert_eq!(table.entry_for(key), table.entry_for(key));
    }
}
