//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{Notification, RequestId};
use crate::transform::ToneRequest;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Show a notification to the user
    Notify(Notification),
    /// Run the transform capability in the background.
    /// Sends `Msg::Tone(ToneMsg::Completed)` when done.
    TransformText {
        request_id: RequestId,
        request: ToneRequest,
    },
}

impl Cmd {
    /// Shorthand for an info notification
    pub fn notice(message: impl Into<String>) -> Self {
        Cmd::Notify(Notification::info(message))
    }

    /// The notification carried by this command, if any
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Cmd::Notify(n) => Some(n),
            Cmd::None | Cmd::TransformText { .. } => None,
        }
    }

    /// The transform request carried by this command, if any
    pub fn transform_request(&self) -> Option<(RequestId, &ToneRequest)> {
        match self {
            Cmd::TransformText {
                request_id,
                request,
            } => Some((*request_id, request)),
            Cmd::None | Cmd::Notify(_) => None,
        }
    }
}
