//! Tone update - selection-scoped transform orchestration
//!
//! `Apply` validates, snapshots and issues the transform command.
//! `Completed` splices the result back and repairs the selection.
//! Every path through either message yields exactly one notification.

use crate::commands::Cmd;
use crate::editable::SelectionRange;
use crate::messages::ToneMsg;
use crate::model::{AppModel, Notification, PendingTone, RequestId};
use crate::tone::ToneId;
use crate::transform::{normalize_replacement, ToneRequest, TransformError};

pub const MSG_NOTHING_TO_TRANSFORM: &str = "Add some text first";
pub const MSG_NOTHING_SELECTED: &str = "No text selected to transform";
pub const MSG_BUSY: &str = "A tone change is already in progress";
pub const MSG_APPLIED: &str = "Tone applied";
pub const MSG_FAILED: &str = "Failed to change tone";
pub const MSG_ABANDONED: &str = "Tone change abandoned";
pub const DETAIL_SELECTION: &str = "Your selection was transformed.";
pub const DETAIL_WHOLE_TEXT: &str = "Your text was transformed.";

/// Handle tone messages
pub fn update_tone(model: &mut AppModel, msg: ToneMsg) -> Option<Cmd> {
    match msg {
        ToneMsg::Apply(tone) => Some(apply_tone(model, tone)),
        ToneMsg::Completed { request_id, result } => complete_tone(model, request_id, result),
        ToneMsg::Abandon => {
            let pending = model.pending.take()?;
            tracing::info!(request = %pending.request_id, tone = %pending.tone, "Abandoned tone request");
            Some(Cmd::notice(MSG_ABANDONED))
        }
    }
}

fn apply_tone(model: &mut AppModel, tone: ToneId) -> Cmd {
    if let Some(pending) = &model.pending {
        tracing::warn!(
            request = %pending.request_id,
            requested = %tone,
            "Rejecting tone request while another is in flight"
        );
        return Cmd::notice(MSG_BUSY);
    }

    if model.store.buffer().is_blank() {
        return Cmd::notice(MSG_NOTHING_TO_TRANSFORM);
    }

    let selection = model.selection.clamp_to(model.store.len_chars());
    let range = (!selection.is_empty()).then_some(selection);
    let target_text = match range {
        Some(range) => match model.store.buffer().slice(range.as_range()) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(%range, error = %e, "Selection does not fit the buffer");
                return Cmd::notice(MSG_NOTHING_SELECTED);
            }
        },
        None => model.text(),
    };

    if target_text.trim().is_empty() {
        return Cmd::notice(MSG_NOTHING_SELECTED);
    }

    // Taken before the call so every outcome can be undone
    model.store.snapshot_if_non_empty();

    let request_id = model.allocate_request_id();
    model.pending = Some(PendingTone {
        request_id,
        tone,
        range,
    });

    tracing::info!(
        request = %request_id,
        %tone,
        range = ?range,
        chars = target_text.chars().count(),
        "Requesting tone change"
    );

    Cmd::TransformText {
        request_id,
        request: ToneRequest {
            target_text,
            tone,
            source_range: range,
        },
    }
}

fn complete_tone(
    model: &mut AppModel,
    request_id: RequestId,
    result: Result<String, TransformError>,
) -> Option<Cmd> {
    match model.pending {
        Some(pending) if pending.request_id == request_id => {}
        _ => {
            tracing::debug!(request = %request_id, "Dropping result for a request no longer pending");
            return None;
        }
    }
    // Clears the busy flag and active tone on every path below
    let pending = model.pending.take()?;

    let replacement = match result.map(|text| normalize_replacement(&text)) {
        Ok(text) if text.is_empty() => Err(TransformError::EmptyResult),
        other => other,
    };

    let replacement = match replacement {
        Ok(text) => text,
        Err(e) => return Some(failure(pending, e.reason())),
    };

    let detail = match pending.range {
        Some(range) => {
            if let Err(e) = model.store.replace_range(range, &replacement) {
                model.selection = model.selection.clamp_to(model.store.len_chars());
                return Some(failure(pending, e.to_string()));
            }
            model.selection = SelectionRange::covering(range.start(), &replacement);
            DETAIL_SELECTION
        }
        None => {
            model.store.replace_all(&replacement);
            model.selection = SelectionRange::collapsed(model.store.len_chars());
            DETAIL_WHOLE_TEXT
        }
    };

    tracing::info!(
        request = %pending.request_id,
        tone = %pending.tone,
        selection = %model.selection,
        "Tone applied"
    );
    Some(Cmd::Notify(Notification::success(MSG_APPLIED, detail)))
}

fn failure(pending: PendingTone, reason: String) -> Cmd {
    tracing::warn!(
        request = %pending.request_id,
        tone = %pending.tone,
        %reason,
        "Tone change failed"
    );
    Cmd::Notify(Notification::failure(MSG_FAILED, Some(reason)))
}
