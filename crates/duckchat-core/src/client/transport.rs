//! Network seam between the turn state machine and the chat service.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::streaming::ByteStream;
use crate::token::{token_from_headers, TokenManager, VqdToken, VQD_HEADER};
use crate::{ChatError, Turn};

use super::config::ClientConfig;

/// JSON body of a chat request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Turn>,
}

/// Response head plus the unread body of a chat request.
pub struct ChatReply {
    pub status: u16,
    pub reason: String,
    /// Token for the next exchange, when the service sent one.
    pub rotated_token: Option<VqdToken>,
    pub body: ByteStream,
}

impl ChatReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for ChatReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatReply")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("rotated_token", &self.rotated_token)
            .finish_non_exhaustive()
    }
}

/// The two calls a chat turn needs from the network.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Obtain a fresh session token.
    async fn acquire_token(&self) -> Result<VqdToken, ChatError>;

    /// Post the conversation and return once response headers arrive.
    ///
    /// Non-success statuses are returned as a reply, not an error, so the
    /// caller decides how to report them.
    async fn open_chat(
        &self,
        token: &VqdToken,
        request: &ChatRequest,
    ) -> Result<ChatReply, ChatError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn acquire_token(&self) -> Result<VqdToken, ChatError> {
        (**self).acquire_token().await
    }

    async fn open_chat(
        &self,
        token: &VqdToken,
        request: &ChatRequest,
    ) -> Result<ChatReply, ChatError> {
        (**self).open_chat(token, request).await
    }
}

/// reqwest-backed transport talking to the real endpoints.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    tokens: TokenManager,
    http: reqwest::Client,
    chat_url: String,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            tokens: TokenManager::new(http.clone(), &config.status_url, &config.user_agent),
            http,
            chat_url: config.chat_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn acquire_token(&self) -> Result<VqdToken, ChatError> {
        self.tokens.acquire_token().await
    }

    async fn open_chat(
        &self,
        token: &VqdToken,
        request: &ChatRequest,
    ) -> Result<ChatReply, ChatError> {
        debug!(
            model = %request.model,
            turns = request.messages.len(),
            "chat request"
        );

        let response = self
            .http
            .post(&self.chat_url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "text/event-stream")
            .header(VQD_HEADER, token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let rotated_token = token_from_headers(response.headers());
        let body = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| ChatError::Stream(e.to_string()))
            })
            .boxed();

        Ok(ChatReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            rotated_token,
            body,
        })
    }
}
