//! Wires configuration into a chat session.

use std::time::Duration;

use duckchat_config::DuckChatConfig;
use duckchat_core::{resolve_model, ClientConfig};

/// Client settings from the loaded config, with an optional model override.
pub fn client_config(config: &DuckChatConfig, model: Option<&str>) -> ClientConfig {
    let model = model.unwrap_or(&config.chat.default_model);
    ClientConfig::new()
        .with_endpoints(&config.api.status_url, &config.api.chat_url)
        .with_user_agent(&config.api.user_agent)
        .with_model(resolve_model(model))
        .with_progress_interval(Duration::from_millis(u64::from(
            config.chat.progress_interval_ms,
        )))
        .with_timeouts(
            Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.api.request_timeout_secs)),
        )
}
