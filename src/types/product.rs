//! Product result shapes.
//!
//! A product is a single purchasable SKU bundle (game, edition, add-on,
//! subscription). Products returned by `metGetProductById` carry the most
//! detail; products nested inside concepts or catalog pages are sparse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::common::{Description, LocalizedGenre, Media, Price};
use crate::types::concept::Concept;

/// A PlayStation Store product.
///
/// Every field is optional because each persisted query selects a different
/// subset of the product type.
///
/// # Example
///
/// ```rust
/// use psn_store_api::types::Product;
///
/// let product: Product = serde_json::from_str(
///     r#"{"id":"UP9000-CUSA07408_00-00000000GODOFWAR","name":"God of War","platforms":["PS4"]}"#,
/// ).unwrap();
///
/// assert_eq!(product.name.as_deref(), Some("God of War"));
/// assert!(product.price.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Product ID, e.g. `"UP9000-CUSA07408_00-00000000GODOFWAR"`.
    pub id: Option<String>,
    /// Localized display name.
    pub name: Option<String>,
    /// Name in its original language.
    pub invariant_name: Option<String>,
    /// Title ID, e.g. `"CUSA07408_00"`.
    pub np_title_id: Option<String>,
    /// Platforms, e.g. `["PS4", "PS5"]`.
    pub platforms: Option<Vec<String>>,
    pub publisher_name: Option<String>,
    /// Release timestamp.
    pub release_date: Option<DateTime<Utc>>,
    /// Classification, e.g. `"FULL_GAME"`, `"ADD_ON_PACK"`.
    pub store_display_classification: Option<String>,
    /// Localized classification, e.g. `"Full Game"`.
    pub localized_store_display_classification: Option<String>,
    pub price: Option<Price>,
    pub media: Option<Vec<Media>>,
    /// The concept this product belongs to.
    pub concept: Option<Box<Concept>>,
    /// Age rating (ESRB, PEGI, ...).
    pub content_rating: Option<ContentRating>,
    pub edition: Option<Edition>,
    pub combined_localized_genres: Option<Vec<LocalizedGenre>>,
    pub descriptions: Option<Vec<Description>>,
    pub screen_languages: Option<Vec<String>>,
    pub spoken_languages: Option<Vec<String>>,
}

/// Age rating of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRating {
    /// Rating authority, e.g. `"ESRB"`.
    pub authority: Option<String>,
    /// Rating label, e.g. `"ESRB Mature"`.
    pub description: Option<String>,
    /// Rating code, e.g. `"ESRB_MATURE"`.
    pub name: Option<String>,
    /// Rating icon URL.
    pub url: Option<String>,
    pub descriptors: Option<Vec<ContentRatingDescriptor>>,
    pub interactive_elements: Option<Vec<ContentRatingInteractiveElement>>,
}

/// A content descriptor, e.g. "Blood and Gore".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContentRatingDescriptor {
    pub description: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// An interactive element, e.g. "In-Game Purchases".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContentRatingInteractiveElement {
    pub description: Option<String>,
    pub name: Option<String>,
}

/// Edition information (standard, deluxe, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Edition {
    pub name: Option<String>,
    /// Edition kind, e.g. `"STANDARD"`, `"OTHER"`.
    #[serde(rename = "type")]
    pub edition_type: Option<String>,
    pub ordering: Option<i64>,
    /// Feature bullet points.
    pub features: Option<Vec<String>>,
}

/// A call to action shown on a product page (buy, pre-order, upsell).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GameCta {
    /// CTA kind, e.g. `"ADD_TO_CART"`, `"UPSELL_PS_PLUS_GAME_CATALOG"`.
    #[serde(rename = "type")]
    pub cta_type: Option<String>,
    pub price: Option<Price>,
    pub action: Option<GameCtaAction>,
    pub meta: Option<GameCtaMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GameCtaAction {
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    pub param: Option<Vec<GameCtaActionParam>>,
}

/// A named action parameter, e.g. `skuId`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GameCtaActionParam {
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCtaMeta {
    pub exclusive: Option<bool>,
    pub pre_order: Option<bool>,
    /// Upsell service, e.g. `"PS_PLUS"`, `"NONE"`.
    pub up_sell_service: Option<String>,
}
