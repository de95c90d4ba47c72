//! HTTP and client types for PlayStation Store API communication.
//!
//! This module provides the transport layer and the persisted-query client
//! built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreClient`]: Executes persisted-query operations and returns typed results
//! - [`Transport`]: The "send one request, get one response" contract
//! - [`ReqwestTransport`]: The default transport, built on `reqwest`
//! - [`HttpRequest`]: A request to be sent by a transport
//! - [`HttpResponse`]: A raw response returned by a transport
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`ApiError`]: The error taxonomy returned by every API call
//! - [`TransportError`]: Failures where no response was received
//!
//! # Example
//!
//! ```rust,ignore
//! use psn_store_api::{Region, StoreClient, StoreConfig};
//! use psn_store_api::operations::ConceptById;
//!
//! let config = StoreConfig::builder().region(Region::UnitedStates).build()?;
//! let client = StoreClient::new(&config)?;
//!
//! let concept = client.get_concept_by_id(&ConceptById::new("10001130")).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call sends exactly one request. Wrap the client (or supply a
//! custom [`Transport`]) to add retries.

mod errors;
mod http_request;
mod http_response;
pub mod persisted;
mod transport;

pub use errors::{ApiError, ApiErrorKind, TransportError, DEFAULT_API_ERROR_MESSAGE};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use persisted::{StoreClient, SDK_VERSION};
pub use transport::{ReqwestTransport, Transport};
