//! Consumer-facing progress callbacks.

/// Receives the assembled reply as it grows.
///
/// `text` is always the full reply so far, never a diff. Every turn ends
/// with exactly one terminal notification: `on_progress(.., true)` with the
/// complete reply, or `on_error` with a status line.
pub trait ProgressSink: Send {
    fn on_progress(&mut self, text: &str, is_final: bool);

    /// A turn failed; `message` is a human-readable status line. Replaces
    /// the final progress notification for that turn.
    fn on_error(&mut self, message: &str) {
        self.on_progress(message, true);
    }
}

impl<F> ProgressSink for F
where
    F: FnMut(&str, bool) + Send,
{
    fn on_progress(&mut self, text: &str, is_final: bool) {
        self(text, is_final)
    }
}
