//! Tone picker configuration
//!
//! Stored in `~/.config/tone-picker/config.yaml`. Every field has a default,
//! so a partial file (or none at all) is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::editable::DEFAULT_HISTORY_LIMIT;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upper bound for `request_timeout_secs`; larger values are clamped
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Which transform capability to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// A tone service speaking `{text, toneId, selection}` → `{result}`
    Service,
    /// The Mistral chat-completions API, called directly
    #[default]
    Mistral,
}

/// Settings for the tone service backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000/api/ToneChanger".to_string(),
        }
    }
}

/// Settings for the Mistral backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MistralConfig {
    pub url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            url: "https://api.mistral.ai/v1/chat/completions".to_string(),
            model: "mistral-small-latest".to_string(),
            api_key_env: "MISTRAL_API_KEY".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

/// Configuration for a tone picker session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub backend: BackendKind,
    pub service: ServiceConfig,
    pub mistral: MistralConfig,
    /// Transport timeout for one transform call
    pub request_timeout_secs: u64,
    /// Maximum number of undo snapshots kept
    pub history_limit: usize,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            service: ServiceConfig::default(),
            mistral: MistralConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ToneConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Transport timeout for one transform call.
    ///
    /// Zero falls back to the default and anything above
    /// [`MAX_REQUEST_TIMEOUT_SECS`] is clamped.
    pub fn request_timeout(&self) -> Duration {
        let secs = match self.request_timeout_secs {
            0 => {
                tracing::warn!(
                    "request_timeout_secs is 0, using {}s",
                    DEFAULT_REQUEST_TIMEOUT_SECS
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }
            secs if secs > MAX_REQUEST_TIMEOUT_SECS => {
                tracing::warn!(
                    "request_timeout_secs {} is too large, using {}s",
                    secs,
                    MAX_REQUEST_TIMEOUT_SECS
                );
                MAX_REQUEST_TIMEOUT_SECS
            }
            secs => secs,
        };
        Duration::from_secs(secs)
    }
}
