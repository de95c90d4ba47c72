//! Result shapes returned by PlayStation Store operations.
//!
//! # Overview
//!
//! Every shape is a plain serde struct whose fields are all `Option`s and
//! which implements `Default`. The default value is what an operation returns
//! when its data path resolves to `null` (e.g. an unknown product ID for which
//! the API answers `{"data":{"productRetrieve":null}}`).
//!
//! Field names follow the API's camelCase names; fields called `type` on the
//! wire are exposed with a descriptive prefix (`media_type`, `edition_type`,
//! ...) and `__typename` is exposed as `typename`. Unknown fields are ignored.
//!
//! | Shape | Operations |
//! |---|---|
//! | [`Product`] | `metGetProductById`, `wcaProductStarRatingRetrive` |
//! | [`Concept`] | `metGetConceptById`, `metGetConceptByProductIdQuery`, `metGetPricingDataByConceptId`, `wcaConceptStarRatingRetrive` |
//! | [`CategoryGrid`] | `categoryGridRetrieve` |
//! | [`AddOnProducts`] | `metGetAddOnsByTitleId` |
//! | [`TierSelectorOffers`] | `featuresRetrieve` |

mod add_ons;
mod catalog;
mod common;
mod concept;
mod product;
mod subscription;

pub use add_ons::AddOnProducts;
pub use catalog::{CategoryFacet, CategoryFacetValue, CategoryGrid, CategorySortingOption};
pub use common::{
    CompatibilityNotice, Description, ErrorObject, ErrorObjectExtensions, LocalizedGenre, Media,
    PageInfo, PersonalizedMeta, Price, Qualification, ReleaseDateDescriptor,
};
pub use concept::{Concept, SelectableProducts};
pub use product::{
    ContentRating, ContentRatingDescriptor, ContentRatingInteractiveElement, Edition, GameCta,
    GameCtaAction, GameCtaActionParam, GameCtaMeta, Product,
};
pub use subscription::{SubscriptionOffer, TierSelectorOffers};
