//! Structural classification of earnings entries into line buckets.

use crate::models::Entry;

/// Structural category of a disclosed line.
///
/// Determines which payment grammar applies to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A top-level entry with no sub-items.
    Naked,
    /// The heading line of a grouped entry.
    Heading,
    /// A sub-item under a heading.
    Sub,
}

impl Category {
    /// All categories, in the order they are reported.
    pub const ALL: [Category; 3] = [Category::Naked, Category::Heading, Category::Sub];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Naked => "naked",
            Category::Heading => "heading",
            Category::Sub => "sub",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-category line buckets in source traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuckets {
    pub naked: Vec<String>,
    pub heading: Vec<String>,
    pub sub: Vec<String>,
}

impl LineBuckets {
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Naked => &self.naked,
            Category::Heading => &self.heading,
            Category::Sub => &self.sub,
        }
    }

    pub fn total(&self) -> usize {
        self.naked.len() + self.heading.len() + self.sub.len()
    }

    /// Fold another set of buckets into this one, preserving order.
    pub fn extend(&mut self, other: LineBuckets) {
        self.naked.extend(other.naked);
        self.heading.extend(other.heading);
        self.sub.extend(other.sub);
    }
}

/// Bucket every line of a section's entries by structural shape.
///
/// Classification looks only at entry shape, never at text content, and
/// bucket order matches source traversal order.
pub fn classify_section(entries: &[Entry]) -> LineBuckets {
    let mut buckets = LineBuckets::default();
    for entry in entries {
        match entry {
            Entry::Naked(text) => buckets.naked.push(text.clone()),
            Entry::Heading { text, subs } => {
                buckets.heading.push(text.clone());
                buckets.sub.extend(subs.iter().cloned());
            }
        }
    }
    buckets
}
