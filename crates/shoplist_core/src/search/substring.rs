//! Case-insensitive substring matching over item text fields.
//!
//! # Invariants
//! - A missing or empty query matches every item.
//! - `notes` is only consulted when present.
//! - Matching is partial (substring), never whole-word or fuzzy.

use crate::model::item::Item;

/// Normalized, non-empty search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Parses raw caller input.
    ///
    /// Returns `None` for a missing or empty query, meaning "match all".
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(text) if !text.is_empty() => Some(Self {
                needle: text.to_lowercase(),
            }),
            _ => None,
        }
    }

    /// Lowercased needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `name` or present `notes` contains the needle, ignoring case.
    pub fn matches(&self, item: &Item) -> bool {
        contains_folded(&item.name, &self.needle)
            || item
                .notes
                .as_deref()
                .is_some_and(|notes| contains_folded(notes, &self.needle))
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
