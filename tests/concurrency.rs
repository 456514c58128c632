//! Busy gate: one transform at a time, locked edits, stale results

mod common;

use common::{apply, apply_expecting_request, complete, edit, only_notification, test_model};
use tone_picker::editable::SelectionRange;
use tone_picker::messages::EditMsg;
use tone_picker::model::{NotificationKind, RequestId};

#[test]
fn test_second_apply_while_busy_is_rejected() {
    let mut model = test_model("The quick fox", 4, 9);
    let (first, _) = apply_expecting_request(&mut model, "professional-concise");

    let cmd = apply(&mut model, "casual-expanded");

    let n = only_notification(&cmd);
    assert_eq!(n.kind, NotificationKind::Info);
    assert_eq!(n.message, "A tone change is already in progress");
    assert!(cmd.unwrap().transform_request().is_none());
    // No extra snapshot, first request still owns the slot
    assert_eq!(model.store.history().len(), 1);
    assert_eq!(model.pending.map(|p| p.request_id), Some(first));

    complete(&mut model, first, Ok("swift"));
    assert_eq!(model.text(), "The swift fox");
}

#[test]
fn test_apply_allowed_again_after_completion() {
    let mut model = test_model("hi there", 0, 0);
    let (first, _) = apply_expecting_request(&mut model, "casual-concise");
    complete(&mut model, first, Ok("hey"));

    let (second, _) = apply_expecting_request(&mut model, "professional-balanced");
    assert_ne!(first, second);
}

#[test]
fn test_edits_are_locked_while_busy() {
    let mut model = test_model("The quick fox", 4, 9);
    let (id, _) = apply_expecting_request(&mut model, "professional-concise");

    for msg in [
        EditMsg::SetText("The".to_string()),
        EditMsg::SetSelection { start: 0, end: 3 },
        EditMsg::Undo,
        EditMsg::Reset,
    ] {
        let cmd = edit(&mut model, msg);
        let n = only_notification(&cmd);
        assert_eq!(n.kind, NotificationKind::Info);
    }

    assert_eq!(model.text(), "The quick fox");
    assert_eq!(model.selection(), SelectionRange::new(4, 9));
    assert_eq!(model.store.history().len(), 1);

    complete(&mut model, id, Ok("swift"));
    assert_eq!(model.text(), "The swift fox");
    assert_eq!(model.selection(), SelectionRange::new(4, 9));
}

#[test]
fn test_result_for_unknown_request_is_dropped() {
    let mut model = test_model("The quick fox", 4, 9);
    let (id, _) = apply_expecting_request(&mut model, "professional-concise");

    let stray = complete(&mut model, RequestId(id.0 + 100), Ok("nope"));

    assert!(stray.is_none());
    assert!(model.is_busy());
    assert_eq!(model.text(), "The quick fox");
}

#[test]
fn test_duplicate_completion_is_ignored() {
    let mut model = test_model("The quick fox", 4, 9);
    let (id, _) = apply_expecting_request(&mut model, "professional-concise");

    complete(&mut model, id, Ok("swift"));
    let again = complete(&mut model, id, Ok("speedy"));

    assert!(again.is_none());
    assert_eq!(model.text(), "The swift fox");
}

#[test]
fn test_captured_range_revalidated_against_live_buffer() {
    let mut model = test_model("The quick fox", 4, 9);
    let (id, _) = apply_expecting_request(&mut model, "professional-concise");

    // Shrink the buffer behind the orchestrator's back
    model.store.replace_all("The");

    let cmd = complete(&mut model, id, Ok("swift"));

    let n = only_notification(&cmd);
    assert_eq!(n.kind, NotificationKind::Failure);
    assert!(n.detail.unwrap().contains("out of bounds"));
    assert_eq!(model.text(), "The");
    assert_eq!(model.selection(), SelectionRange::collapsed(3));
    assert!(!model.is_busy());
}
