//! Conversation state for one chat session.
//!
//! `SessionState` owns the ordered history sent upstream as prompt
//! context, the active model, and the currently held VQD token.

mod state;

pub use state::SessionState;
