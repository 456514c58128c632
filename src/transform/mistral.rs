//! Direct client for the Mistral chat-completions API

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prompt::build_prompt;
use super::{http_client, ToneRequest, ToneTransformer, TransformError};
use crate::config::MistralConfig;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

/// Rewrites text through Mistral using the tone prompt
#[derive(Debug, Clone)]
pub struct MistralClient {
    config: MistralConfig,
    client: reqwest::blocking::Client,
}

impl MistralClient {
    pub fn new(config: &MistralConfig, timeout: Duration) -> Result<Self, TransformError> {
        Ok(Self {
            config: config.clone(),
            client: http_client(timeout)?,
        })
    }

    /// Read the API key from the configured environment variable
    fn api_key(&self) -> Result<String, TransformError> {
        std::env::var(&self.config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TransformError::NotConfigured("Mistral API key not configured".into()))
    }
}

impl ToneTransformer for MistralClient {
    fn transform(&self, request: &ToneRequest) -> Result<String, TransformError> {
        if request.target_text.is_empty() {
            return Err(TransformError::MissingFields);
        }
        let api_key = self.api_key()?;

        let prompt = build_prompt(&request.target_text, request.tone);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(model = %self.config.model, tone = %request.tone, "Calling Mistral");
        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| TransformError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| TransformError::Transport(e.to_string()))?;
        parse_completion(status, &text)
    }
}

/// Pull the rewritten text out of a chat-completions reply
pub(crate) fn parse_completion(status: u16, body: &str) -> Result<String, TransformError> {
    if !(200..300).contains(&status) {
        tracing::error!(status, body, "Mistral API error");
        return Err(TransformError::Remote {
            status,
            message: Some("Failed to process tone change request".to_string()),
        });
    }

    let invalid = || TransformError::MalformedResponse("Invalid response from Mistral API".into());
    let response: ChatResponse = serde_json::from_str(body).map_err(|_| invalid())?;
    let reply = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .ok_or_else(invalid)?;

    Ok(reply.content.trim().to_string())
}
