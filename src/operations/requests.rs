//! Typed requests for every supported persisted operation.
//!
//! Each request serializes to exactly the `variables` object its operation
//! expects. Metadata (operation name, hash, data path, result shape) lives in
//! the [`Operation::DESCRIPTOR`] constant and never reaches the wire.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::operations::descriptor::{Operation, OperationDescriptor};
use crate::operations::pagination::{Pagination, PsPlusTier, Sorting};
use crate::operations::registry::PersistedOperation;
use crate::types::{AddOnProducts, CategoryGrid, Concept, Product, TierSelectorOffers};

const PRODUCT_PATH: &str = "data.productRetrieve";
const CONCEPT_PATH: &str = "data.conceptRetrieve";

/// Product details by product ID (`metGetProductById`).
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::ProductById;
///
/// let request = ProductById::new("UP9000-CUSA07408_00-00000000GODOFWAR");
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"productId":"UP9000-CUSA07408_00-00000000GODOFWAR"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductById {
    pub product_id: String,
}

impl ProductById {
    #[must_use]
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl Operation for ProductById {
    type Output = Product;
    const DESCRIPTOR: OperationDescriptor<Product> =
        OperationDescriptor::persisted(PersistedOperation::ProductById, PRODUCT_PATH);
}

/// Star rating of a product (`wcaProductStarRatingRetrive`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStarRating {
    pub product_id: String,
}

impl ProductStarRating {
    #[must_use]
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl Operation for ProductStarRating {
    type Output = Product;
    const DESCRIPTOR: OperationDescriptor<Product> =
        OperationDescriptor::persisted(PersistedOperation::ProductStarRating, PRODUCT_PATH);
}

/// Concept details by concept ID (`metGetConceptById`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptById {
    pub concept_id: String,
}

impl ConceptById {
    #[must_use]
    pub fn new(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
        }
    }
}

impl Operation for ConceptById {
    type Output = Concept;
    const DESCRIPTOR: OperationDescriptor<Concept> =
        OperationDescriptor::persisted(PersistedOperation::ConceptById, CONCEPT_PATH);
}

/// The concept a product belongs to (`metGetConceptByProductIdQuery`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptByProductId {
    pub product_id: String,
}

impl ConceptByProductId {
    #[must_use]
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl Operation for ConceptByProductId {
    type Output = Concept;
    const DESCRIPTOR: OperationDescriptor<Concept> =
        OperationDescriptor::persisted(PersistedOperation::ConceptByProductId, CONCEPT_PATH);
}

/// Star rating of a concept (`wcaConceptStarRatingRetrive`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptStarRating {
    pub concept_id: String,
}

impl ConceptStarRating {
    #[must_use]
    pub fn new(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
        }
    }
}

impl Operation for ConceptStarRating {
    type Output = Concept;
    const DESCRIPTOR: OperationDescriptor<Concept> =
        OperationDescriptor::persisted(PersistedOperation::ConceptStarRating, CONCEPT_PATH);
}

/// Pricing of every product in a concept (`metGetPricingDataByConceptId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDataByConceptId {
    pub concept_id: String,
}

impl PricingDataByConceptId {
    #[must_use]
    pub fn new(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
        }
    }
}

impl Operation for PricingDataByConceptId {
    type Output = Concept;
    const DESCRIPTOR: OperationDescriptor<Concept> =
        OperationDescriptor::persisted(PersistedOperation::PricingDataByConceptId, CONCEPT_PATH);
}

/// Add-ons of a title (`metGetAddOnsByTitleId`).
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::{AddOnsByTitleId, Pagination};
///
/// let request = AddOnsByTitleId::new("CUSA07408_00");
/// assert_eq!(request.page_args, Pagination::default());
///
/// let request = request.with_page_args(Pagination::new(50, 0).unwrap());
/// assert_eq!(request.page_args.size(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnsByTitleId {
    /// Title ID, e.g. `"CUSA07408_00"`.
    pub np_title_id: String,
    pub page_args: Pagination,
}

impl AddOnsByTitleId {
    /// Creates a request for the first page with the default page size.
    #[must_use]
    pub fn new(np_title_id: impl Into<String>) -> Self {
        Self {
            np_title_id: np_title_id.into(),
            page_args: Pagination::default(),
        }
    }

    #[must_use]
    pub const fn with_page_args(mut self, page_args: Pagination) -> Self {
        self.page_args = page_args;
        self
    }
}

impl Operation for AddOnsByTitleId {
    type Output = AddOnProducts;
    const DESCRIPTOR: OperationDescriptor<AddOnProducts> = OperationDescriptor::persisted(
        PersistedOperation::AddOnsByTitleId,
        "data.addOnProductsByTitleIdRetrieve",
    );
}

/// PlayStation Plus offers for one tier (`featuresRetrieve`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsPlusTierOffers {
    pub tier_label: PsPlusTier,
}

impl PsPlusTierOffers {
    #[must_use]
    pub const fn new(tier_label: PsPlusTier) -> Self {
        Self { tier_label }
    }
}

impl Operation for PsPlusTierOffers {
    type Output = TierSelectorOffers;
    const DESCRIPTOR: OperationDescriptor<TierSelectorOffers> = OperationDescriptor::persisted(
        PersistedOperation::Features,
        "data.tierSelectorOffersRetrieve",
    );
}

/// One page of a store category (`categoryGridRetrieve`).
///
/// `filter_by` and `facet_options` are free-form; an empty map is sent as
/// `[]`, which is what the endpoint expects when no filter is applied.
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::{Catalog, CatalogSorting, Pagination, Sorting, SortingDirection};
///
/// let request = Catalog::new(
///     "44d8bb20-653e-431e-8ad0-c0a365f68d2f",
///     Pagination::new(24, 0).unwrap(),
///     Sorting::from_catalog_sorting(CatalogSorting::Bestsellers, SortingDirection::Desc),
/// );
///
/// let next = request.next_page();
/// assert_eq!(next.page_args.offset(), 24);
/// assert_eq!(next.id, request.id);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Category ID (a UUID).
    pub id: String,
    pub page_args: Pagination,
    pub sort_by: Sorting,
    #[serde(serialize_with = "map_or_empty_list")]
    pub filter_by: BTreeMap<String, Value>,
    #[serde(serialize_with = "map_or_empty_list")]
    pub facet_options: BTreeMap<String, Value>,
}

impl Catalog {
    #[must_use]
    pub fn new(id: impl Into<String>, page_args: Pagination, sort_by: Sorting) -> Self {
        Self {
            id: id.into(),
            page_args,
            sort_by,
            filter_by: BTreeMap::new(),
            facet_options: BTreeMap::new(),
        }
    }

    /// Creates a request for the first page of a category, sorted by release
    /// date (newest first).
    #[must_use]
    pub fn for_category(id: impl Into<String>) -> Self {
        Self::new(id, Pagination::default(), Sorting::default())
    }

    /// Adds a filter, e.g. `("targetPlatforms", json!(["PS4"]))`.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.filter_by.insert(key.into(), value);
        self
    }

    /// Adds a facet option.
    #[must_use]
    pub fn facet_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.facet_options.insert(key.into(), value);
        self
    }

    /// Returns the request for the following page.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page_args: self.page_args.next(),
            ..self.clone()
        }
    }
}

impl Operation for Catalog {
    type Output = CategoryGrid;
    const DESCRIPTOR: OperationDescriptor<CategoryGrid> = OperationDescriptor::persisted(
        PersistedOperation::CategoryGrid,
        "data.categoryGridRetrieve",
    );
}

fn map_or_empty_list<S>(map: &BTreeMap<String, Value>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if map.is_empty() {
        serializer.collect_seq(std::iter::empty::<Value>())
    } else {
        map.serialize(serializer)
    }
}
