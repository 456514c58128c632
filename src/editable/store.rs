//! BufferStore - the live buffer together with its undo trail.

use super::buffer::{EditError, TextBuffer};
use super::history::SnapshotHistory;
use super::selection::SelectionRange;

/// Single source of truth for buffer content and its snapshot history.
///
/// `replace_all` and `replace_range` do not snapshot on their own; callers
/// that want the prior state recoverable call `snapshot_if_non_empty` first.
#[derive(Debug, Clone, Default)]
pub struct BufferStore {
    buffer: TextBuffer,
    history: SnapshotHistory,
    /// Bumped on every live buffer mutation
    revision: u64,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `text`, keeping at most `history_limit` snapshots
    pub fn with_text(text: &str, history_limit: usize) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            history: SnapshotHistory::with_limit(history_limit),
            revision: 0,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Full content as String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Push the current content onto the history unless the buffer is empty.
    /// Never touches the live buffer.
    pub fn snapshot_if_non_empty(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        self.history.push(self.buffer.content());
        true
    }

    /// Restore the most recent snapshot. Returns false (and changes nothing)
    /// when there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.buffer.set_content(&previous);
        self.revision += 1;
        true
    }

    /// Snapshot, then empty the buffer
    pub fn reset(&mut self) {
        self.snapshot_if_non_empty();
        self.replace_all("");
    }

    pub fn replace_all(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.revision += 1;
    }

    /// Splice `text` over `range`; see [`TextBuffer::replace_range`]
    pub fn replace_range(&mut self, range: SelectionRange, text: &str) -> Result<(), EditError> {
        self.buffer.replace_range(range.as_range(), text)?;
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_skips_empty_buffer() {
        let mut store = BufferStore::new();
        assert!(!store.snapshot_if_non_empty());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_snapshot_does_not_touch_buffer() {
        let mut store = BufferStore::with_text("draft", 10);
        assert!(store.snapshot_if_non_empty());
        assert_eq!(store.text(), "draft");
        assert_eq!(store.history().last(), Some("draft"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_undo_restores_and_pops_once() {
        let mut store = BufferStore::with_text("first", 10);
        store.snapshot_if_non_empty();
        store.replace_all("second");

        assert!(store.undo());
        assert_eq!(store.text(), "first");
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_undo_with_no_history_is_noop() {
        let mut store = BufferStore::with_text("keep", 10);
        assert!(!store.undo());
        assert_eq!(store.text(), "keep");
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_reset_snapshots_then_clears() {
        let mut store = BufferStore::with_text("something", 10);
        store.reset();
        assert_eq!(store.text(), "");
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history().last(), Some("something"));
    }

    #[test]
    fn test_reset_on_empty_buffer_adds_nothing() {
        let mut store = BufferStore::new();
        store.reset();
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_replace_range_bumps_revision() {
        let mut store = BufferStore::with_text("The quick fox", 10);
        store
            .replace_range(SelectionRange::new(4, 9), "swift")
            .unwrap();
        assert_eq!(store.text(), "The swift fox");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_replace_range_failure_keeps_revision() {
        let mut store = BufferStore::with_text("abc", 10);
        assert!(store
            .replace_range(SelectionRange::new(1, 7), "x")
            .is_err());
        assert_eq!(store.text(), "abc");
        assert_eq!(store.revision(), 0);
    }
}
