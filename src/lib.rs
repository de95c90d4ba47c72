//! # PlayStation Store API Rust SDK
//!
//! A Rust client for the PlayStation Store GraphQL API, which only accepts
//! persisted queries: requests name a stored query by operation name and
//! SHA-256 hash instead of sending query text.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Typed requests for every supported operation (products, concepts,
//!   catalog pages, add-ons, PlayStation Plus offers) in [`operations`]
//! - Typed result shapes in [`types`]
//! - Runtime hash overrides for persisted queries the store has retired
//! - A closed error taxonomy ([`ApiError`]) for every failure mode
//! - A pluggable [`Transport`] with a `reqwest`-based default
//!
//! ## Quick Start
//!
//! ```rust
//! use psn_store_api::{Region, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .region(Region::UnitedStates)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://web.np.playstation.com/api/graphql/v1/");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use psn_store_api::{Region, StoreClient, StoreConfig};
//! use psn_store_api::operations::{Catalog, ProductById};
//!
//! let config = StoreConfig::builder().region(Region::UnitedStates).build()?;
//! let client = StoreClient::new(&config)?;
//!
//! let product = client
//!     .get_product_by_id(&ProductById::new("UP9000-CUSA07408_00-00000000GODOFWAR"))
//!     .await?;
//!
//! // Walk a category page by page
//! let mut request = Catalog::for_category("28c9c2b2-cecc-415c-9a08-482a605cb104");
//! loop {
//!     let page = client.get_catalog(&request).await?;
//!     for product in page.all_products() {
//!         println!("{:?}", product.name);
//!     }
//!     if page.is_last_page() {
//!         break;
//!     }
//!     request = request.next_page();
//! }
//! ```
//!
//! ## Patching a Stale Hash
//!
//! ```rust,ignore
//! client.override_hash("metGetProductById", "<new sha256 hash>");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and hash overrides are owned by instances
//! - **Fail-fast validation**: Newtypes and request arguments validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries, caching, or pooling policy in the client

pub mod clients;
pub mod config;
pub mod error;
pub mod operations;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{BaseUri, Region, StoreConfig, StoreConfigBuilder, DEFAULT_BASE_URI};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, ApiErrorKind, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    ReqwestTransport, StoreClient, Transport, TransportError,
};
