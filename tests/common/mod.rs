//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tone_picker::commands::Cmd;
use tone_picker::config::ToneConfig;
use tone_picker::editable::SelectionRange;
use tone_picker::messages::{EditMsg, Msg, ToneMsg};
use tone_picker::model::{AppModel, Notification, RequestId};
use tone_picker::tone::ToneId;
use tone_picker::transform::{ToneRequest, ToneTransformer, TransformError};
use tone_picker::update::update;

/// Create a test model with given text and selection
pub fn test_model(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = AppModel::with_text(text, ToneConfig::default());
    model.selection = SelectionRange::new(start, end);
    model
}

pub fn tone(id: &str) -> ToneId {
    id.parse().unwrap()
}

/// Dispatch `Apply` and return the request id of the issued transform
pub fn apply(model: &mut AppModel, id: &str) -> Option<Cmd> {
    update(model, Msg::Tone(ToneMsg::Apply(tone(id))))
}

/// Dispatch `Apply` and expect a transform command
pub fn apply_expecting_request(model: &mut AppModel, id: &str) -> (RequestId, ToneRequest) {
    let cmd = apply(model, id).expect("apply should return a command");
    let (request_id, request) = cmd
        .transform_request()
        .expect("apply should issue a transform");
    (request_id, request.clone())
}

/// Feed a completion for `request_id`
pub fn complete(
    model: &mut AppModel,
    request_id: RequestId,
    result: Result<&str, TransformError>,
) -> Option<Cmd> {
    update(
        model,
        Msg::Tone(ToneMsg::Completed {
            request_id,
            result: result.map(str::to_string),
        }),
    )
}

pub fn edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    update(model, Msg::Edit(msg))
}

/// The single notification carried by a command
pub fn only_notification(cmd: &Option<Cmd>) -> Notification {
    let cmd = cmd.as_ref().expect("expected a command");
    cmd.notification()
        .unwrap_or_else(|| panic!("expected a notification, got {:?}", cmd))
        .clone()
}

// ========================================================================
// Stub transformers for runtime tests
// ========================================================================

/// Returns a fixed reply and records every request it saw
#[derive(Clone)]
pub struct StubTransformer {
    reply: Result<String, TransformError>,
    pub requests: Arc<Mutex<Vec<ToneRequest>>>,
    pub calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl StubTransformer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
        }
    }

    pub fn failing(error: TransformError) -> Self {
        Self {
            reply: Err(error),
            ..Self::replying("")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ToneTransformer for StubTransformer {
    fn transform(&self, request: &ToneRequest) -> Result<String, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.reply.clone()
    }
}
