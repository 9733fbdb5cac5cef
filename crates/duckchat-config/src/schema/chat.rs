//! Conversation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Model used until the user picks another one.
    pub default_model: String,
    /// Minimum spacing between partial-response notifications.
    pub progress_interval_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: "gpt-4o-mini".into(),
            progress_interval_ms: 100,
        }
    }
}
