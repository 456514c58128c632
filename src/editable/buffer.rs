//! Rope-backed text buffer for the editing session.
//!
//! All offsets are character (Unicode scalar value) offsets. The same unit is
//! used by selections, splices and reported lengths so the three never drift.

use ropey::Rope;
use std::ops::Range;

/// Error raised when an edit addresses text outside the buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The range is reversed or extends past the end of the buffer
    #[error("range {start}..{end} is out of bounds for a buffer of {len} characters")]
    OutOfRange { start: usize, end: usize, len: usize },
}

/// The live text content.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from a string slice
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// True when the buffer holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.rope.chars().all(char::is_whitespace)
    }

    /// Get slice of text as String (by character indices)
    pub fn slice(&self, range: Range<usize>) -> Result<String, EditError> {
        self.check_range(&range)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Get full content as String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Set content, replacing everything
    pub fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Replace the characters in `range` with `text`.
    ///
    /// Afterwards the buffer equals `old[..start] + text + old[end..]`. A range
    /// that is reversed or reaches past the end leaves the buffer untouched.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<(), EditError> {
        self.check_range(&range)?;
        if range.start < range.end {
            self.rope.remove(range.clone());
        }
        self.rope.insert(range.start, text);
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), EditError> {
        let len = self.len_chars();
        if range.start > range.end || range.end > len {
            return Err(EditError::OutOfRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
