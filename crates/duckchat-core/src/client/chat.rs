//! The per-turn state machine.

use std::future::Future;
use std::time::Duration;

use duckchat_common::short_id;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::session::SessionState;
use crate::streaming::{Fragment, FragmentStream};
use crate::token::VqdToken;
use crate::{ChatError, Turn};

use super::config::ClientConfig;
use super::progress::ProgressSink;
use super::throttle::{Clock, SystemClock, Throttle};
use super::transport::{ChatRequest, ChatTransport};

/// Summary of a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Full assistant reply (may be empty).
    pub text: String,
    /// `Data` fragments received.
    pub fragments: usize,
    /// Malformed frames skipped by the decoder.
    pub skipped_frames: usize,
    /// Progress notifications sent, including the final one.
    pub notifications: usize,
}

/// A conversation with the chat service.
///
/// Turns take `&mut self`, so at most one is in flight per session.
pub struct ChatSession<T, C = SystemClock> {
    transport: T,
    clock: C,
    state: SessionState,
    progress_interval: Duration,
}

impl<T: ChatTransport> ChatSession<T, SystemClock> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self::with_clock(transport, SystemClock, config)
    }
}

impl<T: ChatTransport, C: Clock> ChatSession<T, C> {
    pub fn with_clock(transport: T, clock: C, config: &ClientConfig) -> Self {
        Self {
            transport,
            clock,
            state: SessionState::new(&config.model),
            progress_interval: config.progress_interval,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &[Turn] {
        self.state.history()
    }

    pub fn model(&self) -> &str {
        self.state.model()
    }

    /// Acquire a fresh session token now instead of at the first send.
    pub async fn initialize(&mut self) -> Result<(), ChatError> {
        let token = self.transport.acquire_token().await?;
        info!(session = %self.state.session_id(), token = %token.fingerprint(), "chat session initialized");
        self.state.set_token(token);
        Ok(())
    }

    /// Switch models, starting a fresh context, and re-initialize the token.
    ///
    /// If the token cannot be acquired the model change still stands; the
    /// next send retries initialization.
    pub async fn change_model(&mut self, model: impl Into<String>) -> Result<(), ChatError> {
        let model = model.into();
        if !self.state.set_model(model.as_str()) {
            return Ok(());
        }
        info!(model = %model, session = %self.state.session_id(), "model changed, starting fresh context");
        self.initialize().await.inspect_err(|e| {
            warn!("failed to initialize session after model change: {e}");
        })
    }

    /// Forget the conversation and the held token; the model is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.state.clear_token();
    }

    /// Send one user message and stream the reply into `sink`.
    ///
    /// `model`, when given and different from the active one, switches
    /// models first (fresh context). Failures are reported to `sink` as a
    /// status line and returned.
    pub async fn send_message(
        &mut self,
        text: &str,
        model: Option<&str>,
        sink: &mut dyn ProgressSink,
    ) -> Result<TurnReport, ChatError> {
        self.run_turn(text, model, sink, None).await
    }

    /// Like [`send_message`](Self::send_message), but stops at the next
    /// suspend point once `cancel` fires. Text streamed before that is kept.
    pub async fn send_message_cancellable(
        &mut self,
        text: &str,
        model: Option<&str>,
        sink: &mut dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<TurnReport, ChatError> {
        self.run_turn(text, model, sink, Some(cancel)).await
    }

    async fn run_turn(
        &mut self,
        text: &str,
        model: Option<&str>,
        sink: &mut dyn ProgressSink,
        cancel: Option<&CancellationToken>,
    ) -> Result<TurnReport, ChatError> {
        let turn = short_id();

        if let Some(model) = model {
            if self.state.set_model(model) {
                info!(turn = %turn, model, "model changed, starting fresh context");
            }
        }

        let token = match self.ensure_token(cancel).await {
            Ok(token) => token,
            Err(e) => {
                let err = match e {
                    ChatError::Cancelled => e,
                    other => ChatError::SessionInit(Box::new(other)),
                };
                error!(turn = %turn, "{err}");
                sink.on_error(&err.status_message());
                return Err(err);
            }
        };

        // Recorded before the request so a failed exchange can be retried
        // with the same context.
        self.state.append_user_turn(text);
        let request = ChatRequest {
            model: self.state.model().to_string(),
            messages: self.state.history().to_vec(),
        };

        let reply = match cancellable(cancel, self.transport.open_chat(&token, &request)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) | Err(e) => {
                error!(turn = %turn, "chat request failed: {e}");
                sink.on_error(&e.status_message());
                return Err(e);
            }
        };

        if !reply.is_success() {
            let err = ChatError::HttpStatus {
                status: reply.status,
                reason: reply.reason,
            };
            // A rejected token would fail every later request too.
            self.state.clear_token();
            error!(turn = %turn, "chat request rejected: {err}");
            sink.on_error(&err.status_message());
            return Err(err);
        }

        match reply.rotated_token {
            Some(rotated) => {
                debug!(turn = %turn, token = %rotated.fingerprint(), "session token rotated");
                self.state.set_token(rotated);
            }
            None => debug!(turn = %turn, "response carried no rotated token"),
        }

        let mut fragments = FragmentStream::new(reply.body);
        let mut throttle = Throttle::new(self.progress_interval);
        let mut message = String::new();
        let mut received = 0;
        let mut notifications = 0;
        // Length of the text carried by the last progress notification.
        let mut notified = 0;

        let outcome = loop {
            let next = match cancellable(cancel, fragments.next_fragment()).await {
                Ok(next) => next,
                Err(e) => break Err(e),
            };
            match next {
                Some(Ok(Fragment::Data(piece))) => {
                    received += 1;
                    message.push_str(&piece);
                    if throttle.ready(self.clock.now()) {
                        sink.on_progress(&message, false);
                        notifications += 1;
                        notified = message.len();
                    }
                }
                Some(Ok(Fragment::Done)) | None => break Ok(()),
                Some(Err(e)) => break Err(e),
            }
        };

        self.state.append_assistant_turn(message.as_str());

        let skipped_frames = fragments.skipped();
        if let Err(e) = outcome {
            error!(turn = %turn, chars = message.len(), "response stream ended early: {e}");
            // Text held back by the throttle still reaches the consumer; the
            // status line is the terminal notification.
            if message.len() != notified {
                sink.on_progress(&message, false);
            }
            sink.on_error(&e.status_message());
            return Err(e);
        }

        sink.on_progress(&message, true);
        notifications += 1;

        debug!(
            turn = %turn,
            fragments = received,
            skipped = skipped_frames,
            chars = message.len(),
            "turn complete"
        );

        Ok(TurnReport {
            text: message,
            fragments: received,
            skipped_frames,
            notifications,
        })
    }

    /// Return the held token, acquiring one first if none is held.
    async fn ensure_token(
        &mut self,
        cancel: Option<&CancellationToken>,
    ) -> Result<VqdToken, ChatError> {
        if let Some(token) = self.state.token() {
            return Ok(token.clone());
        }
        debug!(session = %self.state.session_id(), "no session token held, initializing");
        let token = cancellable(cancel, self.transport.acquire_token()).await??;
        self.state.set_token(token.clone());
        Ok(token)
    }
}

/// Await `fut`, or give up with `Cancelled` once `cancel` fires.
async fn cancellable<F: Future>(
    cancel: Option<&CancellationToken>,
    fut: F,
) -> Result<F::Output, ChatError> {
    match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(ChatError::Cancelled),
            out = fut => Ok(out),
        },
        None => Ok(fut.await),
    }
}
