//! Validation for the smaller sections: chat and logging.

use crate::schema::{DuckChatConfig, LOG_LEVELS};

use super::helpers::{validate_non_empty, validate_range};

/// Validate chat constraints.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &DuckChatConfig) {
    validate_non_empty(errors, "chat.default_model", &config.chat.default_model);
    validate_range(
        errors,
        "chat.progress_interval_ms",
        config.chat.progress_interval_ms,
        0,
        5000,
    );
}

/// Validate logging constraints.
pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &DuckChatConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
