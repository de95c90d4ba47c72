//! HTTP response types for the PlayStation Store API client.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport). The body is kept as raw bytes;
//! decoding it is the job of the envelope decoder.

use std::collections::HashMap;

/// A raw HTTP response as returned by a transport.
///
/// # Example
///
/// ```rust
/// use psn_store_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(404, r#"{"message":"Not Found"}"#);
/// assert!(!response.is_ok());
/// assert_eq!(response.reason_phrase, "Not Found");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The reason phrase sent with the status line (or the canonical one).
    pub reason_phrase: String,
    /// Response headers. Names are lowercase; repeated headers keep every value.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response with the canonical reason phrase for `status` and
    /// no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason_phrase: Self::canonical_reason(status).to_string(),
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Replaces the reason phrase.
    #[must_use]
    pub fn with_reason_phrase(mut self, reason_phrase: impl Into<String>) -> Self {
        self.reason_phrase = reason_phrase.into();
        self
    }

    /// Adds a header value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into().to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` for statuses below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status < 400
    }

    /// Returns the first value of a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the canonical reason phrase for a status code, or an empty
    /// string for unknown codes.
    #[must_use]
    pub fn canonical_reason(status: u16) -> &'static str {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }
}
