//! The external rewriting capability
//!
//! `transform(text, tone) -> text | failure`. The orchestrator only sees the
//! [`ToneTransformer`] trait; the HTTP backends live in [`service`] and
//! [`mistral`].

pub mod mistral;
pub mod prompt;
pub mod service;

use std::time::Duration;

use crate::config::{BackendKind, ToneConfig};
use crate::editable::SelectionRange;
use crate::tone::ToneId;

pub use mistral::MistralClient;
pub use service::ToneServiceClient;

const USER_AGENT: &str = concat!("tone-picker/", env!("CARGO_PKG_VERSION"));

/// Label some models echo before the rewritten text
const ECHOED_LABEL: &str = "rewritten text:";

/// One transform call. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRequest {
    pub target_text: String,
    pub tone: ToneId,
    /// The span being rewritten, `None` when the whole buffer is the target.
    /// Informational only for the capability.
    pub source_range: Option<SelectionRange>,
}

/// Why a transform call failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Missing required fields: text and toneId")]
    MissingFields,
    #[error("{0}")]
    NotConfigured(String),
    #[error("{}", .message.as_deref().unwrap_or("Failed to change tone"))]
    Remote { status: u16, message: Option<String> },
    #[error("{0}")]
    MalformedResponse(String),
    #[error("{0}")]
    Transport(String),
    #[error("The service returned an empty result")]
    EmptyResult,
}

impl TransformError {
    /// Human readable detail for failure notifications
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Anything that can rewrite text in a tone.
///
/// Implementations block; the runtime calls them from a background thread.
pub trait ToneTransformer: Send + Sync {
    fn transform(&self, request: &ToneRequest) -> Result<String, TransformError>;
}

impl<T: ToneTransformer + ?Sized> ToneTransformer for Box<T> {
    fn transform(&self, request: &ToneRequest) -> Result<String, TransformError> {
        (**self).transform(request)
    }
}

/// Build the backend selected in `config`
pub fn build_transformer(config: &ToneConfig) -> Result<Box<dyn ToneTransformer>, TransformError> {
    let timeout = config.request_timeout();
    let transformer: Box<dyn ToneTransformer> = match config.backend {
        BackendKind::Service => Box::new(ToneServiceClient::new(&config.service, timeout)?),
        BackendKind::Mistral => Box::new(MistralClient::new(&config.mistral, timeout)?),
    };
    tracing::debug!(backend = ?config.backend, "Built tone transformer");
    Ok(transformer)
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client, TransformError> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| TransformError::Transport(format!("Failed to build HTTP client: {}", e)))
}

/// Clean up the capability's output before it is spliced in.
///
/// Trims surrounding whitespace and drops a single leading
/// "Rewritten text:" label (any case). Nothing else is touched.
pub fn normalize_replacement(text: &str) -> String {
    let trimmed = text.trim();
    let echoed = trimmed
        .get(..ECHOED_LABEL.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(ECHOED_LABEL));
    if echoed {
        trimmed[ECHOED_LABEL.len()..].trim().to_string()
    } else {
        trimmed.to_string()
    }
}
