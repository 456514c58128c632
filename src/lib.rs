//! Tone Picker - selection-scoped tone rewriting with undo
//!
//! This crate provides the core types and logic for rewriting a selected
//! span (or the whole text) through a remote rewriting service, implementing
//! the Elm Architecture pattern: messages in, model update, commands out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tone;
pub mod tracing;
pub mod transform;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ToneConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use tone::ToneId;
