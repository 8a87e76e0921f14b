// src/document/metadata.rs
// =============================================================================
// Reads the page title and per-level heading counts from a parsed document.
//
// Both are pure reads over the whole tree (headings are NOT scoped to body).
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parse::{selector, ParsedDocument};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Number of h1..h6 elements, index 0 holding the h1 count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadingCounts([usize; 6]);

impl HeadingCounts {
    pub fn new(counts: [usize; 6]) -> Self {
        Self(counts)
    }

    /// Count for heading `level` (1..=6); None outside that range.
    pub fn get(&self, level: usize) -> Option<usize> {
        level.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> [usize; 6] {
        self.0
    }
}

// Renders "h1: 2  h2: 1  h3: 0  h4: 0  h5: 0  h6: 0"
impl fmt::Display for HeadingCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (tag, count)) in HEADING_TAGS.iter().zip(self.0).enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{tag}: {count}")?;
        }
        Ok(())
    }
}

// Text of the first <title> anywhere in the document, or "" when absent
//
// The text nodes are concatenated as-is; no whitespace trimming.
pub fn page_title(document: &ParsedDocument) -> String {
    document
        .select(&selector("title"))
        .next()
        .map(|title| title.text().collect())
        .unwrap_or_default()
}

pub fn heading_counts(document: &ParsedDocument) -> HeadingCounts {
    let mut counts = [0; 6];
    for (count, tag) in counts.iter_mut().zip(HEADING_TAGS) {
        *count = document.select(&selector(tag)).count();
    }
    HeadingCounts(counts)
}
