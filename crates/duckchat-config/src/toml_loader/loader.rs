//! Reading `config.toml`.

use std::io::ErrorKind;
use std::path::Path;

use duckchat_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::DuckChatConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse one config file.
///
/// Missing fields take their defaults. Out-of-range values are reported
/// as a warning and kept, so one bad field does not discard the file.
pub fn load_from_path(path: &Path) -> Result<DuckChatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Load the per-user config, writing the commented template on first run.
///
/// Built-in defaults are used when there is no config directory or the
/// template cannot be written; only an existing file that cannot be read
/// or parsed is an error.
pub fn load_default() -> Result<DuckChatConfig, ConfigError> {
    match default_config_path() {
        Ok(path) => load_or_create(&path),
        Err(e) => {
            warn!("{e}, using built-in defaults");
            Ok(DuckChatConfig::default())
        }
    }
}

pub(crate) fn load_or_create(path: &Path) -> Result<DuckChatConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content, path),
        // Also covers a parent component that is not a directory.
        Err(e) if e.kind() == ErrorKind::NotFound || !path.exists() => {
            if let Err(e) = create_default_config(path) {
                warn!("{e}, using built-in defaults");
            }
            Ok(DuckChatConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse(content: &str, path: &Path) -> Result<DuckChatConfig, ConfigError> {
    let config: DuckChatConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; keeping the values as written");
    }
    debug!(path = %path.display(), model = %config.chat.default_model, "config loaded");
    Ok(config)
}
