//! duckchat configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use duckchat_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ApiConfig, ChatConfig, DuckChatConfig, LoggingConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use duckchat_common::ConfigError;

/// Load config from an explicit path, or from the platform default path
/// when `path` is `None`.
///
/// An explicit path must exist. The default path is created with a
/// commented template on first run.
pub fn load_config(path: Option<&Path>) -> Result<DuckChatConfig, ConfigError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)
        }
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DuckChatConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&DuckChatConfig::default());
        assert!(json.contains("\"api\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gpt-4o-mini\""));
    }

    #[test]
    fn explicit_missing_path_is_file_not_found() {
        let err = load_config(Some(Path::new("/tmp/duckchat_missing_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\ndefault_model = \"claude-3-haiku-20240307\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chat.default_model, "claude-3-haiku-20240307");
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = DuckChatConfig::default();
        let parsed: DuckChatConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed.chat.progress_interval_ms, 100);
        assert_eq!(parsed.api.status_url, config.api.status_url);
    }
}
