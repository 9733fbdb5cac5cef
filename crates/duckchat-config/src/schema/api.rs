//! Remote endpoint and HTTP client settings.

use serde::{Deserialize, Serialize};

/// Endpoints, browser identity, and timeouts used for every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub status_url: String,
    pub chat_url: String,
    pub user_agent: String,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_url: "https://duckduckgo.com/duckchat/v1/status".into(),
            chat_url: "https://duckduckgo.com/duckchat/v1/chat".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
                .into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
