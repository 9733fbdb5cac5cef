//! Tests for TOML config loading, creation, and path resolution.

use super::loader::load_or_create;
use super::*;
use duckchat_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_is_io_error_with_path() {
    let path = Path::new("/tmp/nonexistent_duckchat_config.toml");
    let err = load_from_path(path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
default_model = "mistralai/Mixtral-8x7B-Instruct-v0.1"

[api]
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.chat.default_model,
        "mistralai/Mixtral-8x7B-Instruct-v0.1"
    );
    assert_eq!(config.api.request_timeout_secs, 30);
    // Defaults preserved
    assert_eq!(config.chat.progress_interval_ms, 100);
    assert_eq!(config.api.connect_timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(&err, ConfigError::ParseError(msg) if msg.contains("config.toml")));
}

#[test]
fn invalid_values_are_kept_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chat]\nprogress_interval_ms = 99999\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.progress_interval_ms, 99999);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duckchat").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.default_model, "gpt-4o-mini");
    assert!(config.api.status_url.ends_with("/duckchat/v1/status"));
}

#[test]
fn default_template_validates() {
    let config: crate::schema::DuckChatConfig =
        toml::from_str(&super::template::default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_duckchat() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("duckchat/config.toml"));
    }
}

#[test]
fn first_run_writes_template_and_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duckchat").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.chat.default_model, "gpt-4o-mini");
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .starts_with("# duckchat configuration"));
}

#[test]
fn existing_file_is_read_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chat]\ndefault_model = \"claude-3-haiku-20240307\"\n").unwrap();

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.chat.default_model, "claude-3-haiku-20240307");

    create_default_config(&path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("claude-3-haiku"));
}

#[test]
fn unwritable_location_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");

    assert!(matches!(
        create_default_config(&path),
        Err(ConfigError::Io { .. })
    ));
    let config = load_or_create(&path).unwrap();
    assert_eq!(config.chat.progress_interval_ms, 100);
}
