//! Transport abstraction for PlayStation Store API communication.
//!
//! The client never talks to the network itself: it hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets an [`HttpResponse`] back. This
//! module defines that contract and the default [`ReqwestTransport`].
//!
//! Cancellation and timeouts belong to the transport. The client does not
//! retry, pool connections, or cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Sends one HTTP request and returns the response.
///
/// Implementations must return `Ok` for every response that was received,
/// whatever its status code; `Err` is reserved for failures where no response
/// exists (connection refused, DNS, TLS, timeout).
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use psn_store_api::clients::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// struct Canned(&'static str);
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, self.0))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Default [`Transport`] backed by `reqwest` with rustls.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use psn_store_api::clients::ReqwestTransport;
///
/// let transport = ReqwestTransport::with_timeout(Duration::from_secs(5))?;
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport without a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying reqwest client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new() -> Result<Self, TransportError> {
        Self::build(None)
    }

    /// Creates a transport that aborts requests after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying reqwest client cannot be
    /// created.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Self::build(Some(timeout))
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.uri),
            HttpMethod::Post => self.client.post(&request.uri),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason_phrase: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: body.to_vec(),
        })
    }
}
