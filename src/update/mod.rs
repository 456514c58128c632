//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod tone;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use edit::update_edit;
pub use tone::update_tone;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Tone(m) => tone::update_tone(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SessionSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }
    after.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Text payloads are summarized by length so logs stay small.
/// Example outputs:
/// - `Tone::Apply(ToneId { .. })`
/// - `Edit::SetText(42 chars)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Tone(m) => format!("Tone::{:?}", m),
        Msg::Edit(crate::messages::EditMsg::SetText(text)) => {
            format!("Edit::SetText({} chars)", text.chars().count())
        }
        Msg::Edit(m) => format!("Edit::{:?}", m),
    }
}
