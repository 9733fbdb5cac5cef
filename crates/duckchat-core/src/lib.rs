//! Streaming chat session client for the DuckDuckGo chat service.
//!
//! Provides:
//! - VQD session-token acquisition and per-exchange rotation
//! - Incremental decoding of the `data: ` event stream across arbitrary
//!   chunk boundaries
//! - Conversation history and active-model bookkeeping
//! - A per-turn orchestrator with throttled progress notifications

pub mod client;
pub mod models;
pub mod session;
pub mod streaming;
pub mod token;

pub use client::{
    ChatReply, ChatRequest, ChatSession, ChatTransport, ClientConfig, Clock, HttpTransport,
    ManualClock, ProgressSink, SystemClock, TurnReport,
};
pub use models::{find_model, resolve_model, ModelInfo, DEFAULT_MODEL, KNOWN_MODELS};
pub use session::SessionState;
pub use streaming::{ByteStream, DecodeSkip, Fragment, FragmentStream, LineDecoder};
pub use token::{TokenManager, VqdToken};

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Failures that abort a chat turn.
///
/// Malformed stream frames are not represented here; see [`DecodeSkip`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("no VQD token in status response")]
    NoToken,
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },
    #[error("stream error: {0}")]
    Stream(String),
    #[error("failed to initialize chat session: {0}")]
    SessionInit(Box<ChatError>),
    #[error("turn cancelled")]
    Cancelled,
}

impl ChatError {
    /// Human-readable status line shown to the user in place of a response.
    pub fn status_message(&self) -> String {
        match self {
            Self::HttpStatus { status, reason } => format!("Error: {status} {reason}")
                .trim_end()
                .to_string(),
            Self::SessionInit(_) => "Failed to initialize chat session".to_string(),
            other => format!("Error: {other}"),
        }
    }
}

impl From<ChatError> for duckchat_common::DuckChatError {
    fn from(err: ChatError) -> Self {
        duckchat_common::DuckChatError::Chat(err.status_message())
    }
}
