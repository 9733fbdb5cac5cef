//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = DuckChatConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_status_url() {
    let mut config = DuckChatConfig::default();
    config.api.status_url = "ftp://example.com/status".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.status_url"));
}

#[test]
fn catches_bare_scheme_chat_url() {
    let mut config = DuckChatConfig::default();
    config.api.chat_url = "https://".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.chat_url"));
}

#[test]
fn accepts_plain_http_for_local_endpoints() {
    let mut config = DuckChatConfig::default();
    config.api.status_url = "http://127.0.0.1:8080/status".into();
    config.api.chat_url = "http://127.0.0.1:8080/chat".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_user_agent() {
    let mut config = DuckChatConfig::default();
    config.api.user_agent = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.user_agent"));
}

#[test]
fn catches_zero_connect_timeout() {
    let mut config = DuckChatConfig::default();
    config.api.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.connect_timeout_secs"));
}

#[test]
fn catches_progress_interval_too_large() {
    let mut config = DuckChatConfig::default();
    config.chat.progress_interval_ms = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.progress_interval_ms"));
}

#[test]
fn zero_progress_interval_is_allowed() {
    let mut config = DuckChatConfig::default();
    config.chat.progress_interval_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_default_model() {
    let mut config = DuckChatConfig::default();
    config.chat.default_model = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.default_model"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = DuckChatConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = DuckChatConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = DuckChatConfig::default();
    config.chat.default_model = String::new();
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.default_model"));
    assert!(err.contains("logging.level"));
    assert!(err.contains("; "));
}
