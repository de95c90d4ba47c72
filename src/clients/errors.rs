//! Error types for PlayStation Store API calls.
//!
//! This module contains the closed error taxonomy returned by every API call,
//! plus the error type reported by transports.
//!
//! # Error Handling
//!
//! - [`TransportError`]: The transport could not complete the exchange
//!   (connection refused, TLS failure, timeout, ...)
//! - [`ApiError`]: The single error type callers receive from
//!   [`StoreClient`](crate::clients::StoreClient). Every failure is classified
//!   exactly once into one of its four variants and then propagated unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use psn_store_api::clients::ApiError;
//!
//! match client.get_product_by_id(&request).await {
//!     Ok(product) => println!("{:?}", product.name),
//!     Err(ApiError::NotFound { message, .. }) => println!("No such product: {message}"),
//!     Err(e) => println!("Store API error {}: {}", e.http_status_code(), e),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::types::ErrorObject;

/// Default message for an `errors` entry without a usable `message` field.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "API Error";

/// Error returned when a transport cannot complete an HTTP exchange.
///
/// HTTP error statuses are *not* transport errors; a transport that received a
/// response of any status must return it as an
/// [`HttpResponse`](crate::clients::HttpResponse).
///
/// # Example
///
/// ```rust
/// use psn_store_api::clients::TransportError;
///
/// let error = TransportError::new("connection refused");
/// assert_eq!(error.to_string(), "connection refused");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error with a message and no underlying cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::with_source(error.to_string(), error)
    }
}

/// Discriminant of [`ApiError`], useful for matching without destructuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// Everything else.
    ServerError,
}

/// Error type for PlayStation Store API operations.
///
/// This is a closed taxonomy. Every variant carries the HTTP status code that
/// produced it, a human-readable message, and the raw response payload (if
/// any) for diagnostics.
///
/// `ServerError` is the catch-all: 5xx responses, transport failures, JSON
/// decode failures, denormalization failures, GraphQL `errors` returned with a
/// 200 status, and any status code without a dedicated variant.
///
/// # Example
///
/// ```rust
/// use psn_store_api::clients::{ApiError, ApiErrorKind};
///
/// let error = ApiError::from_status(404, "Not Found", None);
/// assert_eq!(error.kind(), ApiErrorKind::NotFound);
/// assert_eq!(error.http_status_code(), 404);
/// assert_eq!(error.to_string(), "Not Found");
///
/// // Unmapped codes fall through to ServerError
/// let error = ApiError::from_status(418, "I'm a teapot", None);
/// assert_eq!(error.kind(), ApiErrorKind::ServerError);
/// assert_eq!(error.http_status_code(), 418);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The API rejected the request as malformed (HTTP 400).
    #[error("{message}")]
    BadRequest {
        /// The HTTP status code of the response.
        http_status_code: u16,
        /// Human-readable error message.
        message: String,
        /// Raw decoded response payload, if any.
        response_data: Option<Value>,
    },

    /// The API refused the request (HTTP 403).
    #[error("{message}")]
    Forbidden {
        /// The HTTP status code of the response.
        http_status_code: u16,
        /// Human-readable error message.
        message: String,
        /// Raw decoded response payload, if any.
        response_data: Option<Value>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// The HTTP status code of the response.
        http_status_code: u16,
        /// Human-readable error message.
        message: String,
        /// Raw decoded response payload, if any.
        response_data: Option<Value>,
    },

    /// Any other failure.
    #[error("{message}")]
    ServerError {
        /// The HTTP status code of the response, or 500 for local failures.
        http_status_code: u16,
        /// Human-readable error message.
        message: String,
        /// Raw decoded response payload, if any.
        response_data: Option<Value>,
    },
}

impl ApiError {
    /// Classifies an HTTP status code into the error taxonomy.
    ///
    /// | Status | Variant |
    /// |---|---|
    /// | 400 | `BadRequest` |
    /// | 403 | `Forbidden` |
    /// | 404 | `NotFound` |
    /// | anything else | `ServerError` |
    #[must_use]
    pub fn from_status(
        http_status_code: u16,
        message: impl Into<String>,
        response_data: Option<Value>,
    ) -> Self {
        let message = message.into();
        match http_status_code {
            400 => Self::BadRequest {
                http_status_code,
                message,
                response_data,
            },
            403 => Self::Forbidden {
                http_status_code,
                message,
                response_data,
            },
            404 => Self::NotFound {
                http_status_code,
                message,
                response_data,
            },
            // 500, 502, 503, 504 and every unmapped code
            _ => Self::ServerError {
                http_status_code,
                message,
                response_data,
            },
        }
    }

    /// Creates a `ServerError` with status 500 for a failure that happened
    /// locally (transport, JSON decoding, denormalization).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::from_status(500, message, None)
    }

    /// Returns the variant discriminant.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::BadRequest { .. } => ApiErrorKind::BadRequest,
            Self::Forbidden { .. } => ApiErrorKind::Forbidden,
            Self::NotFound { .. } => ApiErrorKind::NotFound,
            Self::ServerError { .. } => ApiErrorKind::ServerError,
        }
    }

    /// Returns the HTTP status code carried by this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::BadRequest {
                http_status_code, ..
            }
            | Self::Forbidden {
                http_status_code, ..
            }
            | Self::NotFound {
                http_status_code, ..
            }
            | Self::ServerError {
                http_status_code, ..
            } => *http_status_code,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::ServerError { message, .. } => message,
        }
    }

    /// Returns the raw response payload, if any.
    #[must_use]
    pub const fn response_data(&self) -> Option<&Value> {
        match self {
            Self::BadRequest { response_data, .. }
            | Self::Forbidden { response_data, .. }
            | Self::NotFound { response_data, .. }
            | Self::ServerError { response_data, .. } => response_data.as_ref(),
        }
    }

    /// Returns `true` for the 4xx variants.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !self.is_server_error()
    }

    /// Returns `true` for `ServerError`.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { .. })
    }

    /// Parses the GraphQL `errors` entries carried in the response payload.
    ///
    /// Returns an empty list when the payload has no `errors` array. Entries
    /// that are not objects are skipped.
    #[must_use]
    pub fn graphql_errors(&self) -> Vec<ErrorObject> {
        self.response_data()
            .and_then(|data| data.get("errors"))
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| serde_json::from_value(e.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(400, "", None).kind(), ApiErrorKind::BadRequest);
        assert_eq!(ApiError::from_status(403, "", None).kind(), ApiErrorKind::Forbidden);
        assert_eq!(ApiError::from_status(404, "", None).kind(), ApiErrorKind::NotFound);
        for code in [500, 502, 503, 504, 599] {
            assert_eq!(
                ApiError::from_status(code, "", None).kind(),
                ApiErrorKind::ServerError
            );
        }
    }

    #[test]
    fn test_unmapped_status_falls_back_to_server_error() {
        for code in [200, 401, 405, 409, 429] {
            let error = ApiError::from_status(code, "boom", None);
            assert!(error.is_server_error());
            assert_eq!(error.http_status_code(), code);
        }
    }

    #[test]
    fn test_accessors_return_carried_values() {
        let data = json!({"message": "Forbidden region"});
        let error = ApiError::from_status(403, "Forbidden region", Some(data.clone()));

        assert_eq!(error.http_status_code(), 403);
        assert_eq!(error.message(), "Forbidden region");
        assert_eq!(error.response_data(), Some(&data));
        assert!(error.is_client_error());
        assert_eq!(error.to_string(), "Forbidden region");
    }

    #[test]
    fn test_internal_error_is_server_error_500() {
        let error = ApiError::internal("Request failed: connection refused");
        assert_eq!(error.kind(), ApiErrorKind::ServerError);
        assert_eq!(error.http_status_code(), 500);
        assert!(error.response_data().is_none());
    }

    #[test]
    fn test_graphql_errors_parses_error_objects() {
        let error = ApiError::from_status(
            200,
            "Product not found",
            Some(json!({
                "errors": [
                    {
                        "message": "Product not found",
                        "path": ["productRetrieve"],
                        "extensions": {"statusCode": 404, "reason": "NOT_FOUND"}
                    },
                    "garbage"
                ]
            })),
        );

        let errors = error.graphql_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message.as_deref(), Some("Product not found"));
        assert_eq!(
            errors[0].extensions.as_ref().and_then(|e| e.status_code),
            Some(404)
        );
    }

    #[test]
    fn test_graphql_errors_empty_without_payload() {
        assert!(ApiError::internal("x").graphql_errors().is_empty());
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = TransportError::with_source("connect failed", io);

        assert_eq!(error.message(), "connect failed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &ApiError::internal("x");
        let _: &dyn std::error::Error = &TransportError::new("x");
    }
}
