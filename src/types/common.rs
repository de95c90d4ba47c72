//! Shapes shared by products, concepts and catalog results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Price information as rendered by the store (already localized strings).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    /// Base price, e.g. `"$69.99"`.
    pub base_price: Option<String>,
    /// Discounted price, equal to the base price when there is no discount.
    pub discounted_price: Option<String>,
    /// Whether the item is free.
    pub is_free: Option<bool>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
}

/// An image or video asset. Media can nest (e.g. a gallery of variants).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    /// GraphQL type name.
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    /// Role of the asset, e.g. `"MASTER"`, `"SCREENSHOT"`.
    pub role: Option<String>,
    /// Asset type, e.g. `"IMAGE"`, `"VIDEO"`.
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Asset URL.
    pub url: Option<String>,
    /// Nested assets.
    pub media: Option<Vec<Media>>,
}

/// Pagination metadata returned by list operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    /// Total number of items across all pages.
    pub total_count: Option<u64>,
    /// Whether this is the last page.
    pub is_last: Option<bool>,
    /// Offset of the first item on this page.
    pub offset: Option<u64>,
    /// Page size.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LocalizedGenre {
    pub value: Option<String>,
}

/// A localized text block (long description, legal text, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Description {
    /// Description kind, e.g. `"LONG"`, `"LEGAL"`.
    #[serde(rename = "type")]
    pub description_type: Option<String>,
    pub value: Option<String>,
}

/// A compatibility notice such as player count or controller features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompatibilityNotice {
    /// Notice kind, e.g. `"NO_OF_PLAYERS"`, `"PS5_VIBRATION"`.
    #[serde(rename = "type")]
    pub notice_type: Option<String>,
    /// Notice value, e.g. `"1"`, `"OPTIONAL"`.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalizedMeta {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub has_media_overrides: Option<bool>,
    pub media: Option<Vec<Media>>,
}

/// A release date together with its display precision.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReleaseDateDescriptor {
    /// Precision, e.g. `"DAY_MONTH_YEAR"`.
    #[serde(rename = "type")]
    pub date_type: Option<String>,
    /// Timestamp string, e.g. `"2022-09-02T04:00:00Z"`.
    pub value: Option<String>,
}

/// A purchase qualification attached to a call to action.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Qualification {
    /// Qualification kind, e.g. `"ENTITLEMENT_IN_CART"`.
    #[serde(rename = "type")]
    pub qualification_type: Option<String>,
    pub value: Option<String>,
}

/// One entry of a GraphQL `errors` array.
///
/// See [`ApiError::graphql_errors`](crate::clients::ApiError::graphql_errors).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ErrorObject {
    /// Human-readable error message.
    pub message: Option<String>,
    /// Path of the field that failed; segments are strings or indices.
    pub path: Option<Vec<Value>>,
    /// Vendor-specific details.
    pub extensions: Option<ErrorObjectExtensions>,
}

/// The `extensions` object of a GraphQL error.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorObjectExtensions {
    /// HTTP-like status code reported by the backend.
    pub status_code: Option<u16>,
    /// Reason code, e.g. `"NOT_FOUND"`.
    pub reason: Option<String>,
    /// Backend error code.
    pub error_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_nests_and_renames_typename() {
        let media: Media = serde_json::from_value(json!({
            "__typename": "Media",
            "role": "GAMEHUB_COVER_ART",
            "type": "IMAGE",
            "url": "https://image.api.playstation.com/cover.png",
            "media": [{"type": "VIDEO", "url": "https://example.com/trailer.mp4"}]
        }))
        .unwrap();

        assert_eq!(media.typename.as_deref(), Some("Media"));
        assert_eq!(media.media_type.as_deref(), Some("IMAGE"));
        let nested = media.media.unwrap();
        assert_eq!(nested[0].media_type.as_deref(), Some("VIDEO"));
        assert!(nested[0].media.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let price: Price = serde_json::from_value(json!({
            "basePrice": "$69.99",
            "discountedPrice": "$34.99",
            "isFree": false,
            "discountText": "-50%",
            "serviceBranding": ["NONE"]
        }))
        .unwrap();

        assert_eq!(price.base_price.as_deref(), Some("$69.99"));
        assert_eq!(price.discounted_price.as_deref(), Some("$34.99"));
        assert_eq!(price.is_free, Some(false));
        assert!(price.currency_code.is_none());
    }

    #[test]
    fn test_explicit_nulls_become_none() {
        let page: PageInfo = serde_json::from_value(json!({
            "totalCount": 250,
            "isLast": null,
            "offset": 0,
            "size": 24
        }))
        .unwrap();

        assert_eq!(page.total_count, Some(250));
        assert!(page.is_last.is_none());
    }

    #[test]
    fn test_error_object_path_accepts_mixed_segments() {
        let error: ErrorObject = serde_json::from_value(json!({
            "message": "Not found",
            "path": ["categoryGridRetrieve", "concepts", 3],
            "extensions": {"statusCode": 404, "reason": "NOT_FOUND", "errorCode": 3_145_729}
        }))
        .unwrap();

        assert_eq!(error.path.unwrap().len(), 3);
        let extensions = error.extensions.unwrap();
        assert_eq!(extensions.status_code, Some(404));
        assert_eq!(extensions.error_code, Some(3_145_729));
    }
}
