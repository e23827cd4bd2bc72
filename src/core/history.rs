//! Bounded history of completed computations.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single completed computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expanded equation, e.g. `"2+3"`.
    pub equation: String,
    /// The grouped result text shown when equals was pressed.
    pub result: String,
    /// When the computation completed (Unix epoch millis).
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(equation: String, result: String) -> Self {
        Self {
            equation,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with a specific timestamp (for testing).
    #[must_use]
    pub fn with_timestamp(equation: String, result: String, timestamp: u64) -> Self {
        Self {
            equation,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns a formatted display string.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.equation, self.result)
    }
}

/// Bounded queue of past computations.
///
/// Oldest entries are dropped once the cap is reached, so the history
/// never grows without bound in a long session.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a history with a custom cap.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when at capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a completed computation.
    pub fn record(&mut self, equation: &str, result: &str) {
        self.push(HistoryEntry::new(equation.to_string(), result.to_string()));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the oldest entry.
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the entry at the given index (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the last n entries, newest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the history to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes history from JSON, re-applying the capacity cap.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// Exports history to a formatted string, one line per entry.
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(equation: &str, result: &str, timestamp: u64) -> HistoryEntry {
        HistoryEntry::with_timestamp(equation.into(), result.into(), timestamp)
    }

    // ===== HistoryEntry tests =====

    #[test]
    fn test_history_entry_new() {
        let e = HistoryEntry::new("2+2".into(), "4".into());
        assert_eq!(e.equation, "2+2");
        assert_eq!(e.result, "4");
        assert!(e.timestamp > 0);
    }

    #[test]
    fn test_history_entry_with_timestamp() {
        let e = entry("3×3", "9", 1_234_567_890);
        assert_eq!(e.equation, "3×3");
        assert_eq!(e.result, "9");
        assert_eq!(e.timestamp, 1_234_567_890);
    }

    #[test]
    fn test_history_entry_display() {
        let e = entry("5+3", "8", 0);
        assert_eq!(e.display(), "5+3 = 8");
    }

    #[test]
    fn test_history_entry_serde_round_trip() {
        let original = entry("10÷2", "5", 2000);
        let json = serde_json::to_string(&original).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }

    // ===== History tests =====

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.max_entries(), History::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_history_with_capacity() {
        let history = History::with_capacity(50);
        assert_eq!(history.max_entries(), 50);
    }

    #[test]
    fn test_history_record() {
        let mut history = History::new();
        history.record("3+4", "7");
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().equation, "3+4");
        assert_eq!(history.last().unwrap().result, "7");
    }

    #[test]
    fn test_history_max_entries_enforcement() {
        let mut history = History::with_capacity(3);
        for n in 1..=4 {
            history.record(&n.to_string(), &n.to_string());
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.first().unwrap().result, "2");
        assert_eq!(history.last().unwrap().result, "4");
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.record("1+1", "2");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_iter_orders() {
        let mut history = History::new();
        history.record("a", "1");
        history.record("b", "2");
        history.record("c", "3");

        let forward: Vec<&str> = history.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(forward, vec!["1", "2", "3"]);
        let backward: Vec<&str> = history.iter_rev().map(|e| e.result.as_str()).collect();
        assert_eq!(backward, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_history_get() {
        let mut history = History::new();
        history.record("a", "1");
        history.record("b", "2");
        assert_eq!(history.get(0).unwrap().result, "1");
        assert_eq!(history.get(1).unwrap().result, "2");
        assert!(history.get(2).is_none());
    }

    #[test]
    fn test_history_last_n() {
        let mut history = History::new();
        for n in 1..=4 {
            history.record(&n.to_string(), &n.to_string());
        }
        let last_2: Vec<&str> = history.last_n(2).iter().map(|e| e.result.as_str()).collect();
        assert_eq!(last_2, vec!["4", "3"]);
        assert_eq!(history.last_n(10).len(), 4);
    }

    #[test]
    fn test_history_json_round_trip() {
        let mut original = History::new();
        original.push(entry("1+1", "2", 1000));
        original.push(entry("1,000×2", "2,000", 2000));

        let json = original.to_json().unwrap();
        let restored = History::from_json(&json).unwrap();
        assert_eq!(original.len(), restored.len());
        for (orig, rest) in original.iter().zip(restored.iter()) {
            assert_eq!(orig, rest);
        }
    }

    #[test]
    fn test_history_from_json_invalid() {
        assert!(History::from_json("invalid json").is_err());
    }

    #[test]
    fn test_history_export_formatted() {
        let mut history = History::new();
        history.push(entry("1+1", "2", 1000));
        history.push(entry("2×3", "6", 2000));
        assert_eq!(history.export_formatted(), "1+1 = 2\n2×3 = 6");
    }

    #[test]
    fn test_history_export_formatted_empty() {
        assert_eq!(History::new().export_formatted(), "");
    }
}
