//! Concept result shapes.
//!
//! A concept groups every product of one game (editions, bundles, add-ons)
//! under a single store page.

use serde::{Deserialize, Serialize};

use crate::types::common::{
    CompatibilityNotice, Description, LocalizedGenre, Media, PersonalizedMeta, Price,
    ReleaseDateDescriptor,
};
use crate::types::product::Product;

/// A PlayStation Store concept.
///
/// Returned by `metGetConceptById`, `metGetConceptByProductIdQuery`,
/// `metGetPricingDataByConceptId` and `wcaConceptStarRatingRetrive`; each
/// fills a different subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Concept {
    /// GraphQL type name.
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    /// Numeric concept ID as a string, e.g. `"10001130"`.
    pub id: Option<String>,
    pub name: Option<String>,
    pub invariant_name: Option<String>,
    pub publisher_name: Option<String>,
    /// Release date with its display precision.
    pub release_date: Option<ReleaseDateDescriptor>,
    pub media: Option<Vec<Media>>,
    pub personalized_meta: Option<PersonalizedMeta>,
    pub price: Option<Price>,
    /// Products that belong to this concept.
    pub products: Option<Vec<Product>>,
    pub default_product: Option<Box<Product>>,
    pub combined_localized_genres: Option<Vec<LocalizedGenre>>,
    pub descriptions: Option<Vec<Description>>,
    pub compatibility_notices: Option<Vec<CompatibilityNotice>>,
    pub is_in_wishlist: Option<bool>,
    pub is_wishlistable: Option<bool>,
    pub selectable_products: Option<SelectableProducts>,
}

impl Concept {
    /// Returns the concept's products, or an empty slice when absent.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }
}

/// Products the user can pick between on a concept page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectableProducts {
    pub purchasable_products: Option<Vec<Product>>,
}
