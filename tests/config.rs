//! Configuration system tests
//!
//! Tests for config paths and tone picker config loading/saving.

use std::time::Duration;

use tempfile::TempDir;
use tone_picker::config::{BackendKind, ToneConfig, MAX_REQUEST_TIMEOUT_SECS};
use tone_picker::config_paths;
use tone_picker::editable::DEFAULT_HISTORY_LIMIT;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("tone-picker"));
}

#[test]
fn test_config_dir_uses_dot_config_on_unix() {
    #[cfg(not(target_os = "windows"))]
    {
        let dir = config_paths::config_dir().unwrap();
        assert!(
            dir.to_string_lossy().contains(".config"),
            "Expected .config in path, got: {}",
            dir.display()
        );
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// ToneConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = ToneConfig::default();
    assert_eq!(config.backend, BackendKind::Mistral);
    assert_eq!(config.service.url, "http://localhost:3000/api/ToneChanger");
    assert_eq!(config.mistral.url, "https://api.mistral.ai/v1/chat/completions");
    assert_eq!(config.mistral.model, "mistral-small-latest");
    assert_eq!(config.mistral.api_key_env, "MISTRAL_API_KEY");
    assert_eq!(config.mistral.max_tokens, 1000);
    assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config = ToneConfig::from_yaml("backend: service\nhistory_limit: 5\n").unwrap();
    assert_eq!(config.backend, BackendKind::Service);
    assert_eq!(config.history_limit, 5);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.mistral.model, "mistral-small-latest");
}

#[test]
fn test_nested_yaml_section() {
    let yaml = "service:\n  url: http://127.0.0.1:9000/tone\nrequest_timeout_secs: 3\n";
    let config = ToneConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.service.url, "http://127.0.0.1:9000/tone");
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
}

#[test]
fn test_unknown_backend_is_rejected() {
    assert!(ToneConfig::from_yaml("backend: carrier-pigeon\n").is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = ToneConfig::default();
    config.backend = BackendKind::Service;
    config.history_limit = 7;
    config.save_to(&path).unwrap();

    let loaded = ToneConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = ToneConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, ToneConfig::default());
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "history_limit: [not, a, number]\n").unwrap();

    assert_eq!(ToneConfig::load_from(&path), ToneConfig::default());
}

#[test]
fn test_zero_timeout_uses_default() {
    let config = ToneConfig::from_yaml("request_timeout_secs: 0\n").unwrap();
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_huge_timeout_is_clamped() {
    let config = ToneConfig::from_yaml("request_timeout_secs: 18446744073709551615\n").unwrap();
    let timeout = config.request_timeout();
    assert_eq!(timeout, Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS));
    // The binary adds a grace period on top of this
    assert!(timeout.checked_add(Duration::from_secs(5)).is_some());
}
