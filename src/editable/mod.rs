//! Buffer-and-history store for the tone picker.
//!
//! # Architecture
//!
//! - [`TextBuffer`]: the live text, backed by `ropey::Rope`, addressed by char offset
//! - [`SelectionRange`]: a `[start, end)` span into the buffer
//! - [`SnapshotHistory`]: bounded stack of prior full-text snapshots
//! - [`BufferStore`]: owns the buffer and history and exposes
//!   snapshot / undo / reset / replace operations
//!
//! # Example
//!
//! ```
//! use tone_picker::editable::{BufferStore, SelectionRange};
//!
//! let mut store = BufferStore::with_text("The quick fox", 10);
//! store.snapshot_if_non_empty();
//! store.replace_range(SelectionRange::new(4, 9), "swift").unwrap();
//! assert_eq!(store.text(), "The swift fox");
//!
//! store.undo();
//! assert_eq!(store.text(), "The quick fox");
//! ```

mod buffer;
mod history;
mod selection;
mod store;

pub use buffer::{EditError, TextBuffer};
pub use history::{SnapshotHistory, DEFAULT_HISTORY_LIMIT};
pub use selection::SelectionRange;
pub use store::BufferStore;
