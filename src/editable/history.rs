//! Snapshot history (undo only) for the editing session.

use std::collections::VecDeque;

/// Default number of snapshots kept before the oldest is evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Linear stack of full-text snapshots, most recent last.
///
/// Only states being left behind are stored; the live buffer never is.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: VecDeque<String>,
    limit: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    /// Create a new history with the default limit
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new history keeping at most `limit` snapshots (minimum 1)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Push a snapshot, evicting the oldest ones past the limit
    pub fn push(&mut self, snapshot: String) {
        self.snapshots.push_back(snapshot);

        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }

    /// Pop the most recent snapshot
    pub fn pop(&mut self) -> Option<String> {
        self.snapshots.pop_back()
    }

    /// The most recent snapshot, if any
    pub fn last(&self) -> Option<&str> {
        self.snapshots.back().map(String::as_str)
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
