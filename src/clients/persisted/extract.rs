//! Data-path extraction and result denormalization.
//!
//! A data path such as `data.conceptRetrieve.products` names the payload
//! inside the envelope. A leading `data.` is optional because the walk always
//! starts at the envelope's `data` member.
//!
//! Extraction is permissive: an absent or `null` member, or a segment that
//! cannot be followed, means "no data" and the operation returns the result
//! shape's default value. Only a value that is present but structurally
//! incompatible with the result shape is an error.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::persisted::envelope::Envelope;

/// Follows `path` from `data`.
///
/// Object members are looked up by key; a segment that parses as an index
/// selects an array element. Returns `None` when `data` is `None`, when any
/// segment is missing, or when the value reached (or any value on the way)
/// is `null`. An empty path (or `data`) returns `data` itself.
///
/// # Example
///
/// ```rust
/// use psn_store_api::clients::persisted::extract_path;
/// use serde_json::json;
///
/// let data = json!({"conceptRetrieve": {"products": [{"id": "a"}]}});
///
/// assert_eq!(
///     extract_path(Some(&data), "data.conceptRetrieve.products.0.id"),
///     Some(&json!("a"))
/// );
/// assert_eq!(extract_path(Some(&data), "conceptRetrieve.media"), None);
/// ```
#[must_use]
pub fn extract_path<'a>(data: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    let mut current = data.filter(|v| !v.is_null())?;

    let path = normalize_path(path);
    if path.is_empty() {
        return Some(current);
    }

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }

    Some(current)
}

/// Extracts the payload at `data_path` from the envelope and maps it into `T`.
///
/// Returns `T::default()` when the path does not resolve.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload exists but does not fit
/// `T` (e.g. a string where an object is expected).
pub fn denormalize<T>(envelope: &Envelope, data_path: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match extract_path(envelope.get("data"), data_path) {
        Some(value) => T::deserialize(value),
        None => {
            tracing::debug!(
                data_path,
                result_shape = std::any::type_name::<T>(),
                "Data path did not resolve, returning empty result"
            );
            Ok(T::default())
        }
    }
}

fn normalize_path(path: &str) -> &str {
    if path == "data" {
        return "";
    }
    path.strip_prefix("data.").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryGrid, Concept, Product};
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        match value {
            Value::Object(map) => map,
            _ => panic!("test envelope must be an object"),
        }
    }

    fn nested(depth: usize, leaf: Value) -> (Value, String) {
        let mut value = leaf;
        let mut segments = Vec::new();
        for i in (0..depth).rev() {
            let key = format!("k{i}");
            let mut map = serde_json::Map::new();
            map.insert(key.clone(), value);
            value = Value::Object(map);
            segments.push(key);
        }
        segments.reverse();
        (value, format!("data.{}", segments.join(".")))
    }

    #[test]
    fn test_extracts_planted_value_at_any_depth() {
        for depth in 1..=6 {
            let planted = json!({"id": format!("value-{depth}")});
            let (data, path) = nested(depth, planted.clone());

            assert_eq!(extract_path(Some(&data), &path), Some(&planted), "{path}");
        }
    }

    #[test]
    fn test_diverging_path_returns_none_not_partial() {
        let (data, _) = nested(4, json!("leaf"));

        for path in [
            "data.x0.k1.k2.k3",
            "data.k0.x1.k2.k3",
            "data.k0.k1.k2.x3",
            "data.k0.k1.k2.k3.k4",
        ] {
            assert_eq!(extract_path(Some(&data), path), None, "{path}");
        }
    }

    #[test]
    fn test_data_prefix_is_optional() {
        let data = json!({"productRetrieve": {"id": "p"}});

        assert_eq!(
            extract_path(Some(&data), "data.productRetrieve"),
            extract_path(Some(&data), "productRetrieve")
        );
    }

    #[test]
    fn test_empty_path_returns_data_itself() {
        let data = json!({"productRetrieve": {}});

        assert_eq!(extract_path(Some(&data), ""), Some(&data));
        assert_eq!(extract_path(Some(&data), "data"), Some(&data));
    }

    #[test]
    fn test_null_or_absent_data_is_none() {
        assert_eq!(extract_path(None, "data.productRetrieve"), None);
        assert_eq!(extract_path(Some(&Value::Null), "data.productRetrieve"), None);
        assert_eq!(extract_path(Some(&Value::Null), ""), None);
    }

    #[test]
    fn test_scalar_on_the_way_is_none() {
        let data = json!({"productRetrieve": "CUSA12345_00"});
        assert_eq!(extract_path(Some(&data), "productRetrieve.id"), None);
    }

    #[test]
    fn test_numeric_segment_indexes_arrays() {
        let data = json!({"grid": {"concepts": [{"id": "a"}, {"id": "b"}]}});

        assert_eq!(
            extract_path(Some(&data), "grid.concepts.1.id"),
            Some(&json!("b"))
        );
        assert_eq!(extract_path(Some(&data), "grid.concepts.2"), None);
        assert_eq!(extract_path(Some(&data), "grid.concepts.first"), None);
    }

    #[test]
    fn test_null_leaf_denormalizes_to_default() {
        let env = envelope(json!({"data": {"productRetrieve": null}}));

        let product: Product = denormalize(&env, "data.productRetrieve").unwrap();

        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_null_data_denormalizes_to_default() {
        let env = envelope(json!({"data": null}));
        let concept: Concept = denormalize(&env, "data.conceptRetrieve").unwrap();
        assert_eq!(concept, Concept::default());

        let env = envelope(json!({}));
        let grid: CategoryGrid = denormalize(&env, "data.categoryGridRetrieve").unwrap();
        assert_eq!(grid, CategoryGrid::default());
    }

    #[test]
    fn test_denormalizes_nested_payload() {
        let env = envelope(json!({
            "data": {"productRetrieve": {"id": "CUSA12345_00", "name": "Test Game"}}
        }));

        let product: Product = denormalize(&env, "data.productRetrieve").unwrap();

        assert_eq!(product.id.as_deref(), Some("CUSA12345_00"));
        assert_eq!(product.name.as_deref(), Some("Test Game"));
    }

    #[test]
    fn test_incompatible_payload_is_an_error() {
        let env = envelope(json!({"data": {"productRetrieve": "not an object"}}));

        let result: Result<Product, _> = denormalize(&env, "data.productRetrieve");

        assert!(result.is_err());
    }
}
