//! Corpus model for a crawled register snapshot.
//!
//! The crawler serializes one JSON object per register edition:
//! member name -> section title -> list of entries, where an entry is
//! either a plain string or a single-key object mapping a heading line
//! to its indented sub-lines. Ingestion validates that duck-typed shape
//! into a closed [`Entry`] enum and preserves document order throughout.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::CorpusError;

/// Section title under which employment and earnings are disclosed.
pub const EMPLOYMENT_SECTION: &str = "1. Employment and earnings";

/// Section title under which UK-sourced gifts, benefits and hospitality
/// are disclosed.
pub const GIFTS_SECTION: &str = "3. Gifts, benefits and hospitality from UK sources";

/// One register edition: every member with their disclosed sections.
///
/// Immutable after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    /// Members in document order.
    pub members: Vec<MemberInterests>,
}

/// All disclosed sections for a single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInterests {
    /// Member name as published.
    pub name: String,
    /// Sections in document order. Unknown section titles are retained
    /// here; they simply never get dispatched to a parser.
    pub sections: Vec<Section>,
}

/// One titled section of a member's disclosures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// One disclosed item of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A standalone text block.
    Naked(String),
    /// A heading line with its indented sub-lines.
    Heading { text: String, subs: Vec<String> },
}

impl Register {
    /// Parse a register from its serialized JSON form.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let raw: RawRegister = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a register from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let raw: RawRegister = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawRegister) -> Result<Self, CorpusError> {
        let mut members = Vec::with_capacity(raw.0.len());
        for (name, sections) in raw.0 {
            let mut converted = Vec::with_capacity(sections.0.len());
            for (title, entries) in sections.0 {
                let entries = entries
                    .into_iter()
                    .map(|e| Entry::from_raw(e, &title))
                    .collect::<Result<Vec<_>, _>>()?;
                converted.push(Section { title, entries });
            }
            members.push(MemberInterests {
                name,
                sections: converted,
            });
        }
        Ok(Register { members })
    }

    /// All sections with the given title, across members, in document order.
    pub fn sections<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a Section> {
        self.members
            .iter()
            .flat_map(|m| m.sections.iter())
            .filter(move |s| s.title == title)
    }
}

impl MemberInterests {
    /// The member's section with the given title, if disclosed.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl Entry {
    fn from_raw(raw: RawEntry, section: &str) -> Result<Self, CorpusError> {
        match raw {
            RawEntry::Text(text) => Ok(Entry::Naked(text)),
            RawEntry::Heading(map) => {
                if map.len() != 1 {
                    return Err(CorpusError::InvalidEntryShape {
                        section: section.to_string(),
                        detail: format!("heading object has {} keys, expected 1", map.len()),
                    });
                }
                let (text, subs) = map.into_iter().next().unwrap();
                Ok(Entry::Heading { text, subs })
            }
            RawEntry::Other(value) => Err(CorpusError::InvalidEntryShape {
                section: section.to_string(),
                detail: format!("entry is neither text nor heading: {value}"),
            }),
        }
    }
}

/// Unvalidated entry as it appears on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Heading(BTreeMap<String, Vec<String>>),
    Other(serde_json::Value),
}

/// Member map in encounter order.
struct RawRegister(Vec<(String, RawSections)>);

/// Section map in encounter order.
struct RawSections(Vec<(String, Vec<RawEntry>)>);

impl<'de> Deserialize<'de> for RawRegister {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = RawRegister;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of member name to sections")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry()? {
                    members.push(pair);
                }
                Ok(RawRegister(members))
            }
        }
        deserializer.deserialize_map(V)
    }
}

impl<'de> Deserialize<'de> for RawSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = RawSections;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section title to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry()? {
                    sections.push(pair);
                }
                Ok(RawSections(sections))
            }
        }
        deserializer.deserialize_map(V)
    }
}
