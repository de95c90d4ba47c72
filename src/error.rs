//! Error types for the PlayStation Store API client.
//!
//! This module contains error types used for configuration and value-object
//! validation. API call failures are reported through
//! [`ApiError`](crate::clients::ApiError) instead.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use psn_store_api::{BaseUri, ConfigError};
//!
//! let result = BaseUri::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUri)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or building requests.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URI cannot be empty.
    #[error("Base URI cannot be empty. Please provide the PlayStation Store GraphQL endpoint.")]
    EmptyBaseUri,

    /// Base URI is not an absolute HTTP(S) URL.
    #[error("Invalid base URI '{uri}'. Please provide a valid URL with scheme (e.g., 'https://web.np.playstation.com/api/graphql/v1/').")]
    InvalidBaseUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// Region locale is invalid.
    #[error("Invalid region '{region}'. Expected a store locale such as 'en-us' or 'ru-ru'.")]
    InvalidRegion {
        /// The invalid region string that was provided.
        region: String,
    },

    /// Pagination arguments are out of range.
    #[error("Invalid pagination: {reason}")]
    InvalidPagination {
        /// The reason the pagination is invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_uri_error_message() {
        let error = ConfigError::EmptyBaseUri;
        assert!(error.to_string().contains("Base URI cannot be empty"));
    }

    #[test]
    fn test_invalid_region_error_message() {
        let error = ConfigError::InvalidRegion {
            region: "not a locale".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a locale"));
        assert!(message.contains("en-us"));
    }

    #[test]
    fn test_invalid_pagination_error_message() {
        let error = ConfigError::InvalidPagination {
            reason: "Size must be greater than 0, got: 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pagination: Size must be greater than 0, got: 0"
        );
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "region" };
        let message = error.to_string();
        assert!(message.contains("region"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyBaseUri;
        let _: &dyn std::error::Error = &error;
    }
}
