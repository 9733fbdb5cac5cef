//! Validation for the `[api]` section.

use crate::schema::DuckChatConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range};

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &DuckChatConfig) {
    let api = &config.api;
    validate_http_url(errors, "api.status_url", &api.status_url);
    validate_http_url(errors, "api.chat_url", &api.chat_url);
    validate_non_empty(errors, "api.user_agent", &api.user_agent);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        api.request_timeout_secs,
        1,
        600,
    );
}
