//! Configuration schema types for duckchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod logging;

pub use api::*;
pub use chat::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for duckchat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DuckChatConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
