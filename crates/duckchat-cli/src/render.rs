//! Prints streamed replies to the terminal.

use std::io::{self, Stderr, Stdout, Write};

use duckchat_core::ProgressSink;

/// Writes only the part of each notification not yet printed.
///
/// Notifications carry the whole reply so far; the terminal gets the new
/// suffix so the reply appears to type itself out.
pub struct TerminalSink<O: Write + Send, E: Write + Send> {
    out: O,
    err: E,
    shown: String,
}

impl TerminalSink<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> TerminalSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            shown: String::new(),
        }
    }

    fn write_suffix(&mut self, text: &str) {
        let fresh = match text.strip_prefix(self.shown.as_str()) {
            Some(rest) => rest,
            // The reply no longer extends what was shown; start a new line.
            None => {
                let _ = writeln!(self.out);
                text
            }
        };
        let _ = self.out.write_all(fresh.as_bytes());
        let _ = self.out.flush();
        self.shown.clear();
        self.shown.push_str(text);
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write + Send, E: Write + Send> ProgressSink for TerminalSink<O, E> {
    fn on_progress(&mut self, text: &str, is_final: bool) {
        self.write_suffix(text);
        if is_final {
            if !text.is_empty() {
                let _ = writeln!(self.out);
            }
            let _ = self.out.flush();
            self.shown.clear();
        }
    }

    fn on_error(&mut self, message: &str) {
        // Close off a partially streamed reply before the status line.
        if !self.shown.is_empty() {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
        let _ = writeln!(self.err, "{message}");
        let _ = self.err.flush();
        self.shown.clear();
    }
}
