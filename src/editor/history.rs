//! Replace history log

use std::fmt;

use super::buffer::LineCol;

/// One replace action, recorded after it was applied
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryEntry {
    /// A single highlighted match was replaced
    ReplacedOne {
        old_text: String,
        new_text: String,
        at: LineCol,
    },
    /// Every match of a pattern was replaced
    ReplacedAll {
        pattern: String,
        replacement: String,
        count: usize,
    },
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::ReplacedOne {
                old_text,
                new_text,
                at,
            } => write!(f, "Replaced '{}' with '{}' at {}.", old_text, new_text, at),
            HistoryEntry::ReplacedAll {
                pattern,
                replacement,
                count,
            } => write!(
                f,
                "Replaced all occurrences of pattern '{}' with '{}' ({} replacements).",
                pattern, replacement, count
            ),
        }
    }
}

/// Append-only, chronological record of replace actions
#[derive(Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        log::debug!("History: {}", entry);
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
