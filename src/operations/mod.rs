//! Persisted operations and their typed requests.
//!
//! # Overview
//!
//! - [`OperationDescriptor`]: name, hash and data path of one operation,
//!   typed by its result shape
//! - [`Operation`]: a request type bound to a descriptor
//! - [`HashOverrides`]: runtime replacements for stale hashes
//! - [`PersistedOperation`]: the operations this library knows about
//! - Typed requests: [`ProductById`], [`ProductStarRating`], [`ConceptById`],
//!   [`ConceptByProductId`], [`ConceptStarRating`], [`PricingDataByConceptId`],
//!   [`AddOnsByTitleId`], [`PsPlusTierOffers`], [`Catalog`]
//! - Request arguments: [`Pagination`], [`Sorting`], [`CatalogSorting`],
//!   [`SortingDirection`], [`PsPlusTier`]
//!
//! # Example
//!
//! ```rust
//! use psn_store_api::operations::{Operation, ProductById};
//!
//! let request = ProductById::new("UP9000-CUSA07408_00-00000000GODOFWAR");
//! assert_eq!(ProductById::DESCRIPTOR.name(), "metGetProductById");
//! assert_eq!(ProductById::DESCRIPTOR.data_path(), "data.productRetrieve");
//! ```

mod descriptor;
mod pagination;
mod registry;
mod requests;

pub use descriptor::{HashOverrides, Operation, OperationDescriptor};
pub use pagination::{
    CatalogSorting, Pagination, PsPlusTier, Sorting, SortingDirection, DEFAULT_PAGE_SIZE,
};
pub use registry::PersistedOperation;
pub use requests::{
    AddOnsByTitleId, Catalog, ConceptById, ConceptByProductId, ConceptStarRating,
    PricingDataByConceptId, ProductById, ProductStarRating, PsPlusTierOffers,
};
