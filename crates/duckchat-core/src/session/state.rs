//! SessionState struct and history management.

use duckchat_common::SessionId;
use tracing::debug;

use crate::models::DEFAULT_MODEL;
use crate::token::VqdToken;
use crate::{Role, Turn};

/// History, model, and token for the active conversational context.
#[derive(Debug)]
pub struct SessionState {
    /// Regenerated on every reset.
    id: SessionId,
    /// Conversation history in send order.
    history: Vec<Turn>,
    /// Model identifier sent with each request.
    model: String,
    /// Token for the next chat request, rotated after every exchange.
    token: Option<VqdToken>,
}

impl SessionState {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            history: Vec::new(),
            model: model.into(),
            token: None,
        }
    }

    pub fn append_user_turn(&mut self, text: impl Into<String>) {
        self.history.push(Turn::user(text));
    }

    /// Record the assistant's reply. Empty replies are not recorded.
    pub fn append_assistant_turn(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.history.push(Turn::assistant(text));
    }

    /// Clear the history and start a new context id.
    pub fn reset(&mut self) {
        self.history.clear();
        self.id = SessionId::new();
        debug!(session = %self.id, "session history reset");
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Switch the active model.
    ///
    /// A different model starts a fresh context: the history is reset and
    /// the held token dropped. Returns whether anything changed.
    pub fn set_model(&mut self, model: impl Into<String>) -> bool {
        let model = model.into();
        if model == self.model {
            return false;
        }
        self.model = model;
        self.reset();
        self.token = None;
        true
    }

    pub fn token(&self) -> Option<&VqdToken> {
        self.token.as_ref()
    }

    pub fn set_token(&mut self, token: VqdToken) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) -> Option<VqdToken> {
        self.token.take()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    /// Number of turns in history.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    /// Exchanges that produced an assistant reply.
    pub fn completed_exchanges(&self) -> usize {
        self.history
            .iter()
            .filter(|turn| turn.role == Role::Assistant)
            .count()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
