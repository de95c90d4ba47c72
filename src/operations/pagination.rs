//! Paging and sorting arguments plus the request enums.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default page size for paginated operations.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page arguments sent as `pageArgs`.
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::Pagination;
///
/// let page = Pagination::new(24, 48).unwrap();
/// assert_eq!(page.size(), 24);
/// assert_eq!(page.next().offset(), 72);
///
/// assert!(Pagination::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
    size: u32,
    offset: u32,
}

impl Pagination {
    /// Creates page arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPagination`] if `size` is zero.
    pub fn new(size: u32, offset: u32) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidPagination {
                reason: format!("Size must be greater than 0, got: {size}"),
            });
        }
        Ok(Self { size, offset })
    }

    /// Creates page arguments for the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPagination`] if `size` is zero.
    pub fn first_page(size: u32) -> Result<Self, ConfigError> {
        Self::new(size, 0)
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the arguments for the following page (same size, offset
    /// advanced by `size`).
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            size: self.size,
            offset: self.offset.saturating_add(self.size),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl<'de> Deserialize<'de> for Pagination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            size: u32,
            #[serde(default)]
            offset: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.size, raw.offset).map_err(serde::de::Error::custom)
    }
}

/// Catalog sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSorting {
    /// Sort by release date.
    ReleaseDate,
    /// Sort by sales over the last 30 days.
    Bestsellers,
    /// Sort by downloads over the last 30 days.
    TopDownloads,
    /// Sort alphabetically.
    ProductName,
    /// Sort by price.
    Price,
}

impl CatalogSorting {
    /// All sort keys.
    pub const ALL: [Self; 5] = [
        Self::ReleaseDate,
        Self::Bestsellers,
        Self::TopDownloads,
        Self::ProductName,
        Self::Price,
    ];

    /// Returns the value sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReleaseDate => "productReleaseDate",
            Self::Bestsellers => "sales30",
            Self::TopDownloads => "downloads30",
            Self::ProductName => "productName",
            Self::Price => "webBasePrice",
        }
    }

    /// Looks up a sort key by its constant name, e.g. `"TOP_DOWNLOADS"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "RELEASE_DATE" => Some(Self::ReleaseDate),
            "BESTSELLERS" => Some(Self::Bestsellers),
            "TOP_DOWNLOADS" => Some(Self::TopDownloads),
            "PRODUCT_NAME" => Some(Self::ProductName),
            "PRICE" => Some(Self::Price),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogSorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortingDirection {
    Asc,
    #[default]
    Desc,
}

impl SortingDirection {
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Looks up a direction by its constant name (`"ASC"` or `"DESC"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Sort arguments sent as `sortBy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorting {
    /// Sort key as sent on the wire.
    pub name: String,
    pub is_ascending: bool,
}

impl Sorting {
    #[must_use]
    pub fn new(name: impl Into<String>, is_ascending: bool) -> Self {
        Self {
            name: name.into(),
            is_ascending,
        }
    }

    /// Builds sort arguments from a catalog sort key and direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use psn_store_api::operations::{CatalogSorting, Sorting, SortingDirection};
    ///
    /// let sorting = Sorting::from_catalog_sorting(CatalogSorting::Price, SortingDirection::Asc);
    /// assert_eq!(sorting.name, "webBasePrice");
    /// assert!(sorting.is_ascending);
    /// ```
    #[must_use]
    pub fn from_catalog_sorting(sorting: CatalogSorting, direction: SortingDirection) -> Self {
        Self::new(sorting.as_str(), direction.is_ascending())
    }
}

impl Default for Sorting {
    fn default() -> Self {
        Self::from_catalog_sorting(CatalogSorting::ReleaseDate, SortingDirection::Desc)
    }
}

/// PlayStation Plus membership tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PsPlusTier {
    #[serde(rename = "TIER_10")]
    Essential,
    #[serde(rename = "TIER_20")]
    Extra,
    #[serde(rename = "TIER_30")]
    Deluxe,
}

impl PsPlusTier {
    /// Returns the tier label sent on the wire.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Essential => "TIER_10",
            Self::Extra => "TIER_20",
            Self::Deluxe => "TIER_30",
        }
    }

    /// Looks up a tier by its constant name (`"ESSENTIAL"`, `"EXTRA"`, `"DELUXE"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ESSENTIAL" => Some(Self::Essential),
            "EXTRA" => Some(Self::Extra),
            "DELUXE" => Some(Self::Deluxe),
            _ => None,
        }
    }
}

impl fmt::Display for PsPlusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
