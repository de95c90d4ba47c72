//! Configuration types for the PlayStation Store API client.
//!
//! This module provides the configuration used to construct a
//! [`StoreClient`](crate::clients::StoreClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all client settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`BaseUri`]: A validated endpoint URI newtype
//! - [`Region`]: The store locale sent with every request
//!
//! # Example
//!
//! ```rust
//! use psn_store_api::{Region, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .region(Region::UnitedStates)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.region().locale(), "en-us");
//! ```

mod newtypes;
mod region;

pub use newtypes::{BaseUri, DEFAULT_BASE_URI};
pub use region::Region;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the PlayStation Store API client.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use psn_store_api::{BaseUri, Region, StoreConfig};
///
/// let config = StoreConfig::builder()
///     .region(Region::Russia)
///     .base_uri(BaseUri::new("https://web.np.playstation.com/api/graphql/v1/").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region(), &Region::Russia);
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    region: Region,
    base_uri: BaseUri,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the store region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the base URI of the GraphQL endpoint.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout used by the default transport, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// `region` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_uri`: [`DEFAULT_BASE_URI`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    region: Option<Region>,
    base_uri: Option<BaseUri>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store region (required).
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the base URI of the GraphQL endpoint.
    #[must_use]
    pub fn base_uri(mut self, base_uri: BaseUri) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout applied by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `region` is not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let region = self
            .region
            .ok_or(ConfigError::MissingRequiredField { field: "region" })?;

        Ok(StoreConfig {
            region,
            base_uri: self.base_uri.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
