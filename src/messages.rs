//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::RequestId;
use crate::tone::ToneId;
use crate::transform::TransformError;

/// Tone messages (applying a tone and its completion)
#[derive(Debug, Clone)]
pub enum ToneMsg {
    /// Rewrite the selection (or the whole text) in this tone
    Apply(ToneId),
    /// The transform call for `request_id` finished
    Completed {
        request_id: RequestId,
        result: Result<String, TransformError>,
    },
    /// The caller no longer cares about the in-flight request.
    /// The call still runs to completion; its result is discarded.
    Abandon,
}

/// Buffer messages coming from the input widget or buttons
#[derive(Debug, Clone)]
pub enum EditMsg {
    /// The widget reported new text (typing, paste)
    SetText(String),
    /// The widget reported a new selection
    SetSelection { start: usize, end: usize },
    /// Restore the previous snapshot
    Undo,
    /// Snapshot, then clear the buffer
    Reset,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Tone(ToneMsg),
    Edit(EditMsg),
}
