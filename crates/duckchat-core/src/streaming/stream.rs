//! Pull-based fragment stream over a response body.

use std::collections::VecDeque;

use futures_util::stream::BoxStream;
use futures_util::StreamExt;

use crate::ChatError;

use super::decoder::{Fragment, LineDecoder};

/// Raw response body: ordered chunks, or a transport failure.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>, ChatError>>;

/// Yields decoded fragments from one response body.
///
/// After `Done`, end of body, or a transport error, every further call
/// returns `None`.
pub struct FragmentStream {
    body: ByteStream,
    decoder: LineDecoder,
    pending: VecDeque<Fragment>,
    finished: bool,
}

impl FragmentStream {
    pub fn new(body: ByteStream) -> Self {
        Self {
            body,
            decoder: LineDecoder::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Next fragment, reading more of the body as needed.
    pub async fn next_fragment(&mut self) -> Option<Result<Fragment, ChatError>> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(Ok(fragment));
            }
            if self.finished || self.decoder.is_done() {
                self.finished = true;
                return None;
            }

            match self.body.next().await {
                Some(Ok(chunk)) => self.pending.extend(self.decoder.feed(&chunk)),
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    self.pending.extend(self.decoder.finish());
                }
            }
        }
    }

    /// Number of malformed frames skipped so far.
    pub fn skipped(&self) -> usize {
        self.decoder.skipped()
    }
}
