//! # History Recorder
//!
//! A bounded, most-recent-first list of past exchanges, shown in the
//! sidebar. One entry per successful round trip; failed completions are
//! not recorded.
//!
//! Backed by a `VecDeque` with a fixed capacity: inserting at the front
//! evicts from the back once the list is full.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use log::debug;

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 10;
/// Titles longer than this many characters are cut and marked.
pub const TITLE_MAX_CHARS: usize = 40;
const TITLE_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    /// Short preview of the triggering user message.
    pub title: String,
    /// The full user message.
    pub preview: String,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    fn new(text: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: derive_title(text),
            preview: text.to_string(),
            created_at: Local::now(),
        }
    }

    /// Display-only creation time, e.g. `14:05:32`.
    pub fn timestamp(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// First `TITLE_MAX_CHARS` characters of `text`, with `...` appended when cut.
pub fn derive_title(text: &str) -> String {
    match text.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TITLE_ELLIPSIS),
        None => text.to_string(),
    }
}

#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a successful exchange triggered by `text`.
    pub fn record(&mut self, text: &str) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(text));
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("History full, evicted \"{}\"", evicted.title);
            }
        }
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_is_verbatim() {
        let text = "a".repeat(30);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn test_title_at_limit_is_verbatim() {
        let text = "b".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn test_long_title_is_cut_at_forty_chars() {
        let text: String = ('a'..='z').cycle().take(50).collect();
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", &text[..40]));
    }

    #[test]
    fn test_title_cut_respects_multibyte_chars() {
        let text = "é".repeat(45);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "é".repeat(40)));
    }

    #[test]
    fn test_record_prepends() {
        let mut history = History::new();
        history.record("first");
        history.record("second");

        let titles: Vec<&str> = history.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_record_keeps_full_preview() {
        let mut history = History::new();
        let text = "x".repeat(60);
        let entry = history.record(&text);
        assert_eq!(entry.preview, text);
        assert!(entry.title.ends_with("..."));
    }

    #[test]
    fn test_eleventh_record_evicts_oldest() {
        let mut history = History::new();
        for i in 0..11 {
            history.record(&format!("message {i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let titles: Vec<String> = history.iter().map(|e| e.title.clone()).collect();
        let expected: Vec<String> = (1..11).rev().map(|i| format!("message {i}")).collect();
        assert_eq!(titles, expected);
        assert!(!titles.contains(&"message 0".to_string()));
    }

    #[test]
    fn test_clear_empties() {
        let mut history = History::new();
        history.record("one");
        history.record("two");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = History::with_capacity(2);
        history.record("a");
        history.record("b");
        history.record("c");
        let titles: Vec<&str> = history.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }
}
