//! Persisted-query execution for the PlayStation Store GraphQL API.
//!
//! # Overview
//!
//! The main type is [`StoreClient`]. Its pipeline is split across small,
//! independently testable stages:
//!
//! - [`encode_variables`] / [`build_query`]: wire encoding of a request
//! - [`decode_envelope`], [`classify_http_error`], [`check_errors`]: envelope
//!   decoding and error classification
//! - [`extract_path`] / [`denormalize`]: locating the payload and mapping it
//!   into a result shape
//!
//! # Wire Format
//!
//! ```text
//! GET <baseUri>op?operationName=metGetProductById
//!     &variables={"productId":"..."}
//!     &extensions={"persistedQuery":{"version":1,"sha256Hash":"..."}}
//! x-psn-store-locale-override: en-us
//! content-type: application/json
//! ```
//!
//! The response is `{"data": {...} | null, "errors": [...] | null}`.

mod client;
mod encoder;
mod envelope;
mod extract;

pub use client::{StoreClient, CONTENT_TYPE_JSON, LOCALE_OVERRIDE_HEADER, SDK_VERSION};
pub use encoder::{
    build_query, encode_variables, operation_uri, PERSISTED_QUERY_VERSION, RESERVED_VARIABLE_KEYS,
};
pub use envelope::{check_errors, classify_http_error, decode as decode_envelope, Envelope};
pub use extract::{denormalize, extract_path};
