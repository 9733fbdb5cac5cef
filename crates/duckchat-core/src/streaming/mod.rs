//! Event-stream decoding for chat responses.
//!
//! The chat endpoint answers with lines of the form `data: {"message":"..."}`
//! terminated by `data: [DONE]`. Chunks from the network can split a line
//! anywhere, so decoding buffers raw bytes and only parses complete lines.
//!
//! [`LineDecoder`] is the synchronous core; [`FragmentStream`] pulls chunks
//! from a response body and hands out fragments one at a time.

mod decoder;
mod stream;


pub use decoder::{parse_line, DecodeSkip, Fragment, LineDecoder, DATA_PREFIX, DONE_SENTINEL};
pub use stream::{ByteStream, FragmentStream};
