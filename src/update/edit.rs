//! Edit update - widget input, undo and reset
//!
//! While a transform is pending the buffer and selection are locked: the
//! captured range must still describe the live buffer when the result lands.

use crate::commands::Cmd;
use crate::editable::SelectionRange;
use crate::messages::EditMsg;
use crate::model::AppModel;

pub const MSG_LOCKED: &str = "Editing is paused while a tone is being applied";

/// Handle edit messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    if let Some(pending) = &model.pending {
        tracing::warn!(request = %pending.request_id, ?msg, "Edit rejected while busy");
        return Some(Cmd::notice(MSG_LOCKED));
    }

    match msg {
        EditMsg::SetText(text) => {
            model.store.replace_all(&text);
            model.selection = model.selection.clamp_to(model.store.len_chars());
            None
        }

        EditMsg::SetSelection { start, end } => {
            let len = model.store.len_chars();
            model.selection = SelectionRange::new(start, end).clamp_to(len);
            None
        }

        EditMsg::Undo => {
            if model.store.undo() {
                model.selection = model.selection.clamp_to(model.store.len_chars());
                tracing::debug!(
                    remaining = model.store.history().len(),
                    "Restored previous snapshot"
                );
            } else {
                tracing::debug!("Nothing to undo");
            }
            None
        }

        EditMsg::Reset => {
            model.store.reset();
            model.selection = SelectionRange::collapsed(0);
            tracing::debug!(history = model.store.history().len(), "Buffer reset");
            None
        }
    }
}
