//! Line reassembly and single-line frame parsing.

use std::fmt;

use serde_json::Value;
use tracing::warn;

/// Field prefix of every data line.
pub const DATA_PREFIX: &str = "data: ";
/// Payload marking the end of the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One decoded unit of the response stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Incremental assistant text.
    Data(String),
    /// End-of-stream sentinel.
    Done,
}

/// A data line whose payload could not be parsed. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSkip {
    pub payload: String,
    pub reason: String,
}

impl fmt::Display for DecodeSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped frame {:?}: {}", self.payload, self.reason)
    }
}

/// Parse one complete line.
///
/// Returns `Ok(None)` for lines that carry no text: blank separators,
/// non-data fields, and payloads without a usable `message`.
pub fn parse_line(line: &str) -> Result<Option<Fragment>, DecodeSkip> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Ok(None);
    };

    if payload == DONE_SENTINEL {
        return Ok(Some(Fragment::Done));
    }

    let value: Value = serde_json::from_str(payload).map_err(|e| DecodeSkip {
        payload: payload.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value
        .get("message")
        .and_then(message_text)
        .map(Fragment::Data))
}

/// Text of a `message` field. Scalars that read as true are appended as
/// their JSON rendering; empty strings, zero, `false`, and `null` carry
/// nothing. Objects and arrays have no displayable text.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Reassembles lines from arbitrarily split chunks.
///
/// Once the `[DONE]` sentinel has been decoded the decoder is inert:
/// later lines, whether from the same chunk or from later ones, are dropped.
#[derive(Debug, Default)]
pub struct LineDecoder {
    /// Bytes of the trailing line that has no newline yet.
    buffer: Vec<u8>,
    done: bool,
    skipped: usize,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and decode every line it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Fragment> {
        let mut out = Vec::new();
        if self.done {
            return out;
        }

        self.buffer.extend_from_slice(chunk);
        let Some(last_newline) = self.buffer.iter().rposition(|&b| b == b'\n') else {
            return out;
        };

        let tail = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, tail);

        for raw in complete[..last_newline].split(|&b| b == b'\n') {
            if self.decode(raw, &mut out) {
                self.buffer.clear();
                break;
            }
        }
        out
    }

    /// Decode whatever is left in the buffer at end of stream.
    ///
    /// The server may close the connection without a final newline or
    /// without sending `[DONE]` at all.
    pub fn finish(&mut self) -> Vec<Fragment> {
        let mut out = Vec::new();
        if self.done || self.buffer.is_empty() {
            self.buffer.clear();
            return out;
        }
        let tail = std::mem::take(&mut self.buffer);
        self.decode(&tail, &mut out);
        out
    }

    /// Whether the `[DONE]` sentinel has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of malformed frames skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns true when the line was the end-of-stream sentinel.
    fn decode(&mut self, raw: &[u8], out: &mut Vec<Fragment>) -> bool {
        let line = String::from_utf8_lossy(raw);
        match parse_line(&line) {
            Ok(Some(Fragment::Done)) => {
                out.push(Fragment::Done);
                self.done = true;
                true
            }
            Ok(Some(fragment)) => {
                out.push(fragment);
                false
            }
            Ok(None) => false,
            Err(skip) => {
                self.skipped += 1;
                warn!(payload = %skip.payload, reason = %skip.reason, "skipping malformed stream frame");
                false
            }
        }
    }
}
