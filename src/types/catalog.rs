//! Catalog (category grid) result shapes.

use serde::{Deserialize, Serialize};

use crate::types::common::PageInfo;
use crate::types::concept::Concept;
use crate::types::product::Product;

/// One page of a store category, as returned by `categoryGridRetrieve`.
///
/// The endpoint normally returns `concepts`, each with its own `products`;
/// use [`CategoryGrid::all_products`] to flatten them.
///
/// # Example
///
/// ```rust
/// use psn_store_api::types::CategoryGrid;
///
/// let grid: CategoryGrid = serde_json::from_str(
///     r#"{"concepts":[{"products":[{"id":"a"},{"id":"b"}]},{"products":null}]}"#,
/// ).unwrap();
///
/// assert_eq!(grid.all_products().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryGrid {
    /// Category ID.
    pub id: Option<String>,
    /// Products listed directly on the grid (rarely populated).
    pub products: Option<Vec<Product>>,
    pub concepts: Option<Vec<Concept>>,
    pub page_info: Option<PageInfo>,
    /// Available filters.
    pub facet_options: Option<Vec<CategoryFacet>>,
    /// Available sort orders.
    pub sorting_options: Option<Vec<CategorySortingOption>>,
}

impl CategoryGrid {
    /// Returns the products of every concept on the page, in order.
    ///
    /// Concepts without a product list are skipped. Returns an empty list when
    /// the page has no concepts.
    #[must_use]
    pub fn all_products(&self) -> Vec<Product> {
        self.concepts
            .iter()
            .flatten()
            .flat_map(|concept| concept.products().iter().cloned())
            .collect()
    }

    /// Returns `true` when the page reports itself as the last one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page_info
            .and_then(|info| info.is_last)
            .unwrap_or(false)
    }
}

/// A filter facet, e.g. genres or price ranges.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryFacet {
    /// Facet key, e.g. `"conceptGenres"`.
    pub name: Option<String>,
    /// Localized label, e.g. `"Genre"`.
    pub display_name: Option<String>,
    pub values: Option<Vec<CategoryFacetValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryFacetValue {
    /// Value key, e.g. `"ACTION"` or `"0-199"`.
    pub key: Option<String>,
    pub display_name: Option<String>,
    /// Number of items matching this value.
    pub count: Option<u64>,
}

/// A sort order offered by the category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySortingOption {
    /// Sort key, e.g. `"productReleaseDate"`.
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub is_ascending: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_products_flattens_concepts_in_order() {
        let grid: CategoryGrid = serde_json::from_value(json!({
            "id": "28c9c2b2-cecc-415c-9a08-482a605cb104",
            "concepts": [
                {"id": "1", "products": [{"id": "p1"}, {"id": "p2"}]},
                {"id": "2"},
                {"id": "3", "products": [{"id": "p3"}]}
            ],
            "pageInfo": {"totalCount": 3, "isLast": true, "offset": 0, "size": 20}
        }))
        .unwrap();

        let ids: Vec<_> = grid
            .all_products()
            .into_iter()
            .filter_map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert!(grid.is_last_page());
    }

    #[test]
    fn test_all_products_without_concepts_is_empty() {
        let grid = CategoryGrid::default();
        assert!(grid.all_products().is_empty());
        assert!(!grid.is_last_page());
    }

    #[test]
    fn test_facets_and_sorting_options() {
        let grid: CategoryGrid = serde_json::from_value(json!({
            "facetOptions": [{
                "name": "conceptGenres",
                "displayName": "Genre",
                "values": [{"key": "ACTION", "displayName": "Action", "count": 1234}]
            }],
            "sortingOptions": [{
                "name": "productReleaseDate",
                "displayName": "Release Date (New - Old)",
                "isAscending": false
            }]
        }))
        .unwrap();

        let facet = &grid.facet_options.unwrap()[0];
        assert_eq!(facet.values.as_ref().unwrap()[0].count, Some(1234));
        assert_eq!(grid.sorting_options.unwrap()[0].is_ascending, Some(false));
    }
}
