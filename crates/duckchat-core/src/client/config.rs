//! Chat client configuration.

use std::time::Duration;

use crate::models::DEFAULT_MODEL;

pub(crate) const DEFAULT_STATUS_URL: &str = "https://duckduckgo.com/duckchat/v1/status";
pub(crate) const DEFAULT_CHAT_URL: &str = "https://duckduckgo.com/duckchat/v1/chat";

/// Browser identity the service expects on every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Chat client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub status_url: String,
    pub chat_url: String,
    pub user_agent: String,
    /// Model for the first turn.
    pub model: String,
    /// Minimum spacing between partial-response notifications.
    pub progress_interval: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            status_url: DEFAULT_STATUS_URL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            progress_interval: Duration::from_millis(100),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_endpoints(
        mut self,
        status_url: impl Into<String>,
        chat_url: impl Into<String>,
    ) -> Self {
        self.status_url = status_url.into();
        self.chat_url = chat_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}
