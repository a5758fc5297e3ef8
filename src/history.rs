//! Session history module.
//!
//! Keeps the text of completed calculations for the lifetime of the
//! engine. Nothing is written to disk.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A bounded log of completed calculations, oldest first.
///
/// When full, pushing a new entry drops the oldest one. A limit of zero
/// disables recording.
///
/// # Examples
///
/// ```rust
/// use tricalc::History;
///
/// let mut history = History::with_limit(2);
/// history.push("1 + 1 = 2");
/// history.push("2 × 3 = 6");
/// history.push("√(9) = 3");
///
/// let entries: Vec<_> = history.iter().collect();
/// assert_eq!(entries, ["2 × 3 = 6", "√(9) = 3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl History {
    /// Create an empty history keeping at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a completed calculation.
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Iterate entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_order() {
        let mut history = History::default();
        history.push("a");
        history.push("b");
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some("b"));
        assert_eq!(history.iter().next(), Some("a"));
    }

    #[test]
    fn test_history_limit() {
        let mut history = History::with_limit(3);
        for i in 0..10 {
            history.push(i.to_string());
        }
        assert_eq!(history.len(), 3);
        let entries: Vec<_> = history.iter().collect();
        assert_eq!(entries, ["7", "8", "9"]);
    }

    #[test]
    fn test_history_disabled() {
        let mut history = History::with_limit(0);
        history.push("1 + 1 = 2");
        assert!(history.is_empty());
        assert_eq!(history.limit(), 0);
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::default();
        history.push("x");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }
}
