//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! tone requests, undo history and selection transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug,message=debug` - scoped filtering
//! - `RUST_LOG=tone_picker::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tone-picker/logs/tone-picker.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::SelectionRange;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output (stderr) respects RUST_LOG, defaulting to `warn`.
/// File logging writes to `~/.config/tone-picker/logs/tone-picker.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG. Stdout carries the rewritten text.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub text_len: usize,
    pub revision: u64,
    pub selection: SelectionRange,
    pub history_len: usize,
    pub busy: bool,
}

impl SessionSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            text_len: model.store.len_chars(),
            revision: model.store.revision(),
            selection: model.selection,
            history_len: model.store.history().len(),
            busy: model.is_busy(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.revision != other.revision {
            changes.push(format!(
                "text: {} → {} chars (rev {})",
                self.text_len, other.text_len, other.revision
            ));
        }
        if self.selection != other.selection {
            changes.push(format!("selection: {} → {}", self.selection, other.selection));
        }
        if self.history_len != other.history_len {
            changes.push(format!(
                "history: {} → {}",
                self.history_len, other.history_len
            ));
        }
        if self.busy != other.busy {
            let status = if other.busy { "busy" } else { "idle" };
            changes.push(status.to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic (debug builds) if the selection escapes the buffer
    pub fn assert_invariants(&self, context: &str) {
        debug_assert!(
            self.selection.end() <= self.text_len,
            "selection {} outside buffer of {} chars after {}",
            self.selection,
            self.text_len,
            context
        );
    }
}
