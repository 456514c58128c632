use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{Msg, ToneMsg};
use crate::model::{AppModel, Notification, NotificationKind};
use crate::transform::ToneTransformer;
use crate::update::update;

/// Drives the update loop and executes commands.
///
/// Transform calls run on background threads and report back through the
/// message channel; everything that touches the model happens on the
/// thread that owns the `App`.
pub struct App<T: ToneTransformer + 'static> {
    model: AppModel,
    transformer: Arc<T>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    notifications: Vec<Notification>,
}

impl<T: ToneTransformer + 'static> App<T> {
    pub fn new(model: AppModel, transformer: T) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            transformer: Arc::new(transformer),
            msg_tx,
            msg_rx,
            notifications: Vec::new(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    /// Run a message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Notify(notification) => self.record(notification),
            Cmd::TransformText {
                request_id,
                request,
            } => {
                let tx = self.msg_tx.clone();
                let transformer = Arc::clone(&self.transformer);
                std::thread::spawn(move || {
                    let result = transformer.transform(&request);
                    // The receiver is gone only when the app was dropped
                    let _ = tx.send(Msg::Tone(ToneMsg::Completed { request_id, result }));
                });
            }
        }
    }

    fn record(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Failure => tracing::warn!(%notification, "notify"),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(%notification, "notify")
            }
        }
        self.notifications.push(notification);
    }

    /// Apply every completed background result without blocking.
    /// Returns true if any message was processed.
    pub fn process_async_messages(&mut self) -> bool {
        let mut processed = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            processed = true;
            self.dispatch(msg);
        }
        processed
    }

    /// Block until no transform is pending or `timeout` elapses.
    /// Returns true when the model is idle. A timeout too large to express
    /// as a deadline (e.g. `Duration::MAX`) waits without one.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.wait_idle_unbounded();
        };
        while self.model.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => self.dispatch(msg),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(?timeout, "Timed out waiting for tone request");
                    return false;
                }
                // We hold a sender ourselves, so this cannot happen while self is alive
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn wait_idle_unbounded(&mut self) -> bool {
        while self.model.is_busy() {
            match self.msg_rx.recv() {
                Ok(msg) => self.dispatch(msg),
                Err(_) => return false,
            }
        }
        true
    }

    /// Drain the notification stream
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
