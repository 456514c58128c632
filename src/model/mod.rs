//! Application model - the complete state of a tone picker session
//!
//! One explicit state object owned by the runtime and handed by reference
//! to `update`. Nothing lives in globals.

pub mod notification;

pub use notification::{Notification, NotificationKind};

use crate::config::ToneConfig;
use crate::editable::{BufferStore, SelectionRange};
use crate::tone::ToneId;

/// Identifies one transform call so late results can be matched or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The transform currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTone {
    pub request_id: RequestId,
    pub tone: ToneId,
    /// Selection captured when the request was issued; `None` for whole-buffer
    pub range: Option<SelectionRange>,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Live buffer and undo history
    pub store: BufferStore,
    /// Current selection as reported by (and rendered back to) the input widget
    pub selection: SelectionRange,
    /// In-flight transform; `Some` means busy
    pub pending: Option<PendingTone>,
    pub config: ToneConfig,
    next_request_id: u64,
}

impl AppModel {
    pub fn new(config: ToneConfig) -> Self {
        Self::with_text("", config)
    }

    /// Create a model holding `text` with the caret at the end
    pub fn with_text(text: &str, config: ToneConfig) -> Self {
        let store = BufferStore::with_text(text, config.history_limit);
        let selection = SelectionRange::collapsed(store.len_chars());
        Self {
            store,
            selection,
            pending: None,
            config,
            next_request_id: 1,
        }
    }

    /// Current buffer content
    pub fn text(&self) -> String {
        self.store.text()
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Busy indicator for the view
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Tone being applied, for in-progress feedback
    pub fn active_tone(&self) -> Option<ToneId> {
        self.pending.map(|p| p.tone)
    }

    pub fn can_undo(&self) -> bool {
        self.store.history().can_undo()
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        id
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(ToneConfig::default())
    }
}
