//! Calculation history.
//!
//! The history is an append-only log of completed operations. Recording is
//! pure: `record` returns a new history and leaves the receiver untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One completed operation as it appears in the history list.
///
/// # Example
///
/// ```rust
/// use quantum_calc::core::HistoryEntry;
///
/// let entry = HistoryEntry::now("sqrt(16.0) = 4.0");
/// assert_eq!(entry.to_string(), "sqrt(16.0) = 4.0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Text shown to the user
    pub text: String,
    /// When the operation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered history of completed operations, newest last.
///
/// Entries are never truncated or deduplicated.
///
/// # Example
///
/// ```rust
/// use quantum_calc::core::{CalculationHistory, HistoryEntry};
///
/// let history = CalculationHistory::new();
/// let history = history.record(HistoryEntry::now("pi(0.0) = 3.141592653589793"));
/// let history = history.record(HistoryEntry::now("square(3.0) = 9.0"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().text, "square(3.0) = 9.0");
/// assert_eq!(history.newest_first()[0].text, "square(3.0) = 9.0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append an entry in place, for the owner of a live session.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entries in the order a history screen lists them.
    pub fn newest_first(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}
