//! History module - bounded FIFO of owned snapshots for undo
//!
//! Holds at most `limit` entries in chronological order; pushing past the
//! limit evicts the oldest. Entries are owned values, never views into live
//! engine state.

use std::collections::VecDeque;

use crate::types::HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    entries: VecDeque<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    /// Empty history; a zero limit is treated as 1
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Rebuild from stored entries (oldest first), keeping the most recent `limit`
    pub fn from_entries(entries: impl IntoIterator<Item = T>, limit: usize) -> Self {
        let mut history = Self::new(limit);
        for entry in entries {
            history.push(entry);
        }
        history
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append, evicting the oldest entry when full
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Drop the most recent entry and return the one that becomes current
    ///
    /// Returns `None` without touching anything when one entry or fewer
    /// remain.
    pub fn pop_latest(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.entries.pop_back();
        self.entries.back()
    }

    /// Replace everything with a single entry
    pub fn reset(&mut self, entry: T) {
        self.entries.clear();
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Clone> History<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
