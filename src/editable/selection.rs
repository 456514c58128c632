//! Selection range type for the editing session.

use serde::Serialize;
use std::ops::Range;

/// A half-open `[start, end)` span of character offsets into the buffer.
/// `start == end` means no span is chosen (caret only).
///
/// Fields are private so `start <= end` holds for every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Create a selection, swapping reversed input so that `start <= end`
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed selection (caret with no span)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// The range that exactly covers `text` once inserted at `start`
    pub fn covering(start: usize, text: &str) -> Self {
        Self {
            start,
            end: start + text.chars().count(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Check if selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters spanned
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends into `0..=len`
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = SelectionRange::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_selection_normalizes_reversed() {
        let sel = SelectionRange::new(9, 4);
        assert_eq!((sel.start(), sel.end()), (4, 9));
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_selection_covering_counts_chars() {
        assert_eq!(SelectionRange::covering(4, "swift"), SelectionRange::new(4, 9));
        assert_eq!(SelectionRange::covering(0, "über"), SelectionRange::new(0, 4));
        assert!(SelectionRange::covering(3, "").is_empty());
    }

    #[test]
    fn test_selection_clamp() {
        let sel = SelectionRange::new(3, 20).clamp_to(10);
        assert_eq!(sel, SelectionRange::new(3, 10));

        let sel = SelectionRange::new(12, 20).clamp_to(10);
        assert_eq!(sel, SelectionRange::collapsed(10));
    }

    #[test]
    fn test_reversed_input_never_underflows_len() {
        let sel = SelectionRange::new(usize::MAX, 0);
        assert_eq!(sel.start(), 0);
        assert_eq!(sel.len(), usize::MAX);
        assert_eq!(SelectionRange::new(7, 2).clamp_to(5).len(), 3);
    }

    #[test]
    fn test_selection_serializes_as_object() {
        let json = serde_json::to_string(&SelectionRange::new(1, 3)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":3}"#);
    }
}
