//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod api;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::DuckChatConfig;
use duckchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DuckChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    misc::validate_chat(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
