//! VQD session-token acquisition.
//!
//! Every chat request must carry the opaque token the service hands out.
//! A fresh one is obtained by probing the status endpoint with the
//! `x-vqd-accept` opt-in header; after that, each chat response returns
//! the next token in the same header.

use std::fmt;

use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use tracing::debug;

use crate::ChatError;

/// Header carrying the session token in both directions.
pub const VQD_HEADER: &str = "x-vqd-4";
/// Opt-in header asking the status endpoint to issue a token.
pub const VQD_ACCEPT_HEADER: &str = "x-vqd-accept";

/// Opaque session token issued by the chat service.
#[derive(Clone, PartialEq, Eq)]
pub struct VqdToken(String);

impl VqdToken {
    /// Wrap a raw header value. Blank values are not tokens.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix that is safe to put in logs.
    pub fn fingerprint(&self) -> String {
        let prefix: String = self.0.chars().take(8).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for VqdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VqdToken").field(&"[REDACTED]").finish()
    }
}

/// Read the session token from response headers, if one was sent.
pub fn token_from_headers(headers: &HeaderMap) -> Option<VqdToken> {
    headers
        .get(VQD_HEADER)?
        .to_str()
        .ok()
        .and_then(VqdToken::new)
}

/// Fetches new session tokens from the status endpoint.
///
/// Holds no token itself; the caller decides where the token lives.
#[derive(Debug, Clone)]
pub struct TokenManager {
    http: reqwest::Client,
    status_url: String,
    user_agent: String,
}

impl TokenManager {
    pub fn new(
        http: reqwest::Client,
        status_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            http,
            status_url: status_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Probe the status endpoint and extract a fresh token.
    pub async fn acquire_token(&self) -> Result<VqdToken, ChatError> {
        let response = self
            .http
            .get(&self.status_url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "*/*")
            .header(VQD_ACCEPT_HEADER, "1")
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        debug!(status = %response.status(), "status probe answered");

        let token = token_from_headers(response.headers()).ok_or(ChatError::NoToken)?;
        debug!(token = %token.fingerprint(), "acquired session token");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn blank_values_are_rejected() {
        assert!(VqdToken::new("").is_none());
        assert!(VqdToken::new("   ").is_none());
        assert_eq!(VqdToken::new(" 4-abc ").unwrap().as_str(), "4-abc");
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = VqdToken::new("4-secret-token-value").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn fingerprint_keeps_only_a_prefix() {
        let token = VqdToken::new("4-1234567890abcdef").unwrap();
        assert_eq!(token.fingerprint(), "4-123456…");

        let short = VqdToken::new("abc").unwrap();
        assert_eq!(short.fingerprint(), "abc…");
    }

    #[test]
    fn token_is_read_from_vqd_header() {
        let mut headers = HeaderMap::new();
        assert!(token_from_headers(&headers).is_none());

        headers.insert(VQD_HEADER, HeaderValue::from_static("4-rotated"));
        assert_eq!(token_from_headers(&headers).unwrap().as_str(), "4-rotated");
    }

    #[test]
    fn empty_header_is_not_a_token() {
        let mut headers = HeaderMap::new();
        headers.insert(VQD_HEADER, HeaderValue::from_static(""));
        assert!(token_from_headers(&headers).is_none());
    }
}
