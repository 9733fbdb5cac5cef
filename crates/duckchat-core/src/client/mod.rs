//! Chat session client.
//!
//! [`ChatSession`] runs one turn at a time: make sure a token is held,
//! post the conversation, decode the streamed reply, notify the consumer
//! at a bounded rate, and commit the reply to history.
//!
//! The network sits behind [`ChatTransport`] and time behind [`Clock`],
//! so the whole turn state machine can be driven from tests.

mod chat;
mod config;
mod progress;
mod throttle;
mod transport;


pub use chat::{ChatSession, TurnReport};
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use progress::ProgressSink;
pub use throttle::{Clock, ManualClock, SystemClock};
pub use transport::{ChatReply, ChatRequest, ChatTransport, HttpTransport};
