//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The production PlayStation Store GraphQL endpoint.
pub const DEFAULT_BASE_URI: &str = "https://web.np.playstation.com/api/graphql/v1/";

/// A validated base URI for the persisted-query endpoint.
///
/// The URI must be an absolute `http` or `https` URL. It is normalized to end
/// with a `/` so that the operation path (`op?...`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use psn_store_api::BaseUri;
///
/// let uri = BaseUri::new("https://web.np.playstation.com/api/graphql/v1").unwrap();
/// assert_eq!(uri.as_ref(), "https://web.np.playstation.com/api/graphql/v1/");
/// assert_eq!(uri.host_name(), "web.np.playstation.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri {
    uri: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUri {
    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUri`] if the URI is empty, or
    /// [`ConfigError::InvalidBaseUri`] if it has no `http(s)://` scheme or no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let mut uri = uri.trim().to_string();

        if uri.is_empty() {
            return Err(ConfigError::EmptyBaseUri);
        }

        let host_start = if uri.starts_with("https://") {
            "https://".len()
        } else if uri.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidBaseUri { uri });
        };

        // Query strings and fragments would break `<base>op?...`
        if uri.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        let remainder = &uri[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(uri.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        if !uri.ends_with('/') {
            uri.push('/');
        }

        Ok(Self {
            uri,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URI.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.uri[self.host_start..self.host_end]
    }

    /// Returns the URI of the persisted-query operation endpoint (`<base>op`).
    #[must_use]
    pub fn operation_endpoint(&self) -> String {
        format!("{}op", self.uri)
    }
}

impl Default for BaseUri {
    fn default() -> Self {
        Self {
            uri: DEFAULT_BASE_URI.to_string(),
            host_start: "https://".len(),
            host_end: "https://web.np.playstation.com".len(),
        }
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl Serialize for BaseUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.uri)
    }
}

impl<'de> Deserialize<'de> for BaseUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_uri_appends_trailing_slash() {
        let uri = BaseUri::new("https://example.com/api/graphql/v1").unwrap();
        assert_eq!(uri.as_ref(), "https://example.com/api/graphql/v1/");
    }

    #[test]
    fn test_base_uri_keeps_existing_trailing_slash() {
        let uri = BaseUri::new("https://example.com/api/").unwrap();
        assert_eq!(uri.as_ref(), "https://example.com/api/");
    }

    #[test]
    fn test_base_uri_rejects_empty() {
        assert_eq!(BaseUri::new("   "), Err(ConfigError::EmptyBaseUri));
    }

    #[test]
    fn test_base_uri_rejects_missing_scheme() {
        assert!(matches!(
            BaseUri::new("web.np.playstation.com/api"),
            Err(ConfigError::InvalidBaseUri { .. })
        ));
        assert!(matches!(
            BaseUri::new("ftp://example.com/"),
            Err(ConfigError::InvalidBaseUri { .. })
        ));
    }

    #[test]
    fn test_base_uri_rejects_missing_host() {
        assert!(matches!(
            BaseUri::new("https:///api"),
            Err(ConfigError::InvalidBaseUri { .. })
        ));
    }

    #[test]
    fn test_base_uri_rejects_query_string() {
        assert!(matches!(
            BaseUri::new("https://example.com/api?x=1"),
            Err(ConfigError::InvalidBaseUri { .. })
        ));
    }

    #[test]
    fn test_base_uri_host_name_with_port() {
        let uri = BaseUri::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(uri.host_name(), "127.0.0.1");
        assert_eq!(uri.operation_endpoint(), "http://127.0.0.1:8080/op");
    }

    #[test]
    fn test_default_base_uri_matches_constant() {
        let uri = BaseUri::default();
        assert_eq!(uri, BaseUri::new(DEFAULT_BASE_URI).unwrap());
        assert_eq!(uri.host_name(), "web.np.playstation.com");
    }

    #[test]
    fn test_base_uri_serde_roundtrip_validates() {
        let uri: BaseUri = serde_json::from_str(r#""https://example.com/v1""#).unwrap();
        assert_eq!(serde_json::to_string(&uri).unwrap(), r#""https://example.com/v1/""#);

        let invalid: Result<BaseUri, _> = serde_json::from_str(r#""example.com""#);
        assert!(invalid.is_err());
    }
}
