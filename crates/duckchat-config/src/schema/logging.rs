//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive scoping the configured level to duckchat crates.
    pub fn directive(&self) -> String {
        format!("duckchat={}", self.level.to_ascii_lowercase())
    }
}
