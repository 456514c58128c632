//! Client for a tone service endpoint
//!
//! Wire format: `POST {"text", "toneId", "selection"}` answered with
//! `{"result"}` on success or `{"error"}` with a non-success status.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{http_client, ToneRequest, ToneTransformer, TransformError};
use crate::config::ServiceConfig;
use crate::editable::SelectionRange;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceRequest<'a> {
    text: &'a str,
    tone_id: &'a str,
    selection: Option<SelectionRange>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceResponse {
    result: Option<String>,
    error: Option<String>,
}

/// HTTP client for the tone service
#[derive(Debug, Clone)]
pub struct ToneServiceClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl ToneServiceClient {
    pub fn new(config: &ServiceConfig, timeout: Duration) -> Result<Self, TransformError> {
        Ok(Self {
            url: config.url.clone(),
            client: http_client(timeout)?,
        })
    }
}

impl ToneTransformer for ToneServiceClient {
    fn transform(&self, request: &ToneRequest) -> Result<String, TransformError> {
        let body = ServiceRequest {
            text: &request.target_text,
            tone_id: request.tone.as_str(),
            selection: request.source_range,
        };

        tracing::debug!(url = %self.url, tone = %request.tone, "Posting to tone service");
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| TransformError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| TransformError::Transport(e.to_string()))?;
        parse_response(status, &text)
    }
}

/// Interpret a tone service reply
pub(crate) fn parse_response(status: u16, body: &str) -> Result<String, TransformError> {
    let success = (200..300).contains(&status);
    // An unreadable error body still counts as a remote failure
    let parsed: Option<ServiceResponse> = serde_json::from_str(body).ok();

    if !success {
        let message = parsed.and_then(|r| r.error);
        tracing::warn!(status, ?message, "Tone service returned an error");
        return Err(TransformError::Remote { status, message });
    }

    match parsed.and_then(|r| r.result) {
        Some(result) => Ok(result),
        None => Err(TransformError::MalformedResponse(
            "Tone service response is missing the result field".to_string(),
        )),
    }
}
