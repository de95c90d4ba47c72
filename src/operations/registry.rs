//! The persisted queries known to this library.

use std::fmt;

/// A persisted query supported by the PlayStation Store API client.
///
/// Each variant carries the operation name sent as `operationName` and the
/// SHA-256 hash of the stored query document. Sony can retire a hash at any
/// time; use [`StoreClient::override_hash`](crate::clients::StoreClient::override_hash)
/// to patch one without a new release.
///
/// # Example
///
/// ```rust
/// use psn_store_api::operations::PersistedOperation;
///
/// let op = PersistedOperation::from_name("metGetProductById").unwrap();
/// assert_eq!(op, PersistedOperation::ProductById);
/// assert_eq!(op.default_hash().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistedOperation {
    /// `metGetProductById`
    ProductById,
    /// `metGetConceptById`
    ConceptById,
    /// `metGetConceptByProductIdQuery`
    ConceptByProductId,
    /// `metGetPricingDataByConceptId`
    PricingDataByConceptId,
    /// `metGetAddOnsByTitleId`
    AddOnsByTitleId,
    /// `wcaProductStarRatingRetrive`
    ProductStarRating,
    /// `wcaConceptStarRatingRetrive`
    ConceptStarRating,
    /// `categoryGridRetrieve`
    CategoryGrid,
    /// `featuresRetrieve`
    Features,
}

impl PersistedOperation {
    /// All known operations.
    pub const ALL: [Self; 9] = [
        Self::ProductById,
        Self::ConceptById,
        Self::ConceptByProductId,
        Self::PricingDataByConceptId,
        Self::AddOnsByTitleId,
        Self::ProductStarRating,
        Self::ConceptStarRating,
        Self::CategoryGrid,
        Self::Features,
    ];

    /// Returns all known operations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the operation name sent as `operationName`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ProductById => "metGetProductById",
            Self::ConceptById => "metGetConceptById",
            Self::ConceptByProductId => "metGetConceptByProductIdQuery",
            Self::PricingDataByConceptId => "metGetPricingDataByConceptId",
            Self::AddOnsByTitleId => "metGetAddOnsByTitleId",
            // Misspelled on the server side
            Self::ProductStarRating => "wcaProductStarRatingRetrive",
            Self::ConceptStarRating => "wcaConceptStarRatingRetrive",
            Self::CategoryGrid => "categoryGridRetrieve",
            Self::Features => "featuresRetrieve",
        }
    }

    /// Returns the built-in persisted-query hash.
    #[must_use]
    pub const fn default_hash(&self) -> &'static str {
        match self {
            Self::ProductById => "a128042177bd93dd831164103d53b73ef790d56f51dae647064cb8f9d9fc9d1a",
            Self::ConceptById => "cc90404ac049d935afbd9968aef523da2b6723abfb9d586e5f77ebf7c5289006",
            Self::ConceptByProductId => {
                "0a4c9f3693b3604df1c8341fdc3e481f42eeecf961a996baaa65e65a657a6433"
            }
            Self::PricingDataByConceptId => {
                "abcb311ea830e679fe2b697a27f755764535d825b24510ab1239a4ca3092bd09"
            }
            Self::AddOnsByTitleId => {
                "e98d01ff5c1854409a405a5f79b5a9bcd36a5c0679fb33f4e18113c157d4d916"
            }
            // TODO: capture the live star-rating and PS Plus hashes from the web store and replace these
            Self::ProductStarRating => {
                "cedefc4f3fe3a0b5ee8f0ef2a3ac6cd1ac0a1a1e6dc05a3ec8aa2cc8c78d4a3e"
            }
            Self::ConceptStarRating => {
                "3c8d8a1b1a3c2a3c1c5ee7e6e2f1b1d5e9b7d1c0f5d7e5c1f7d8f0a3a5f3b0c2"
            }
            Self::CategoryGrid => "4ce7d410a4db2c8b635a48c1dcec375906ff63b19dadd87e073f8fd0c0481d35",
            Self::Features => "010870e8e9ac2e6ff9e8f8a52b6e5f4bf0e5c0f2ae7c86c5de84a3d9c1c1eb5d",
        }
    }

    /// Looks up an operation by its `operationName`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for PersistedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_hashes() {
        assert_eq!(
            PersistedOperation::ProductById.default_hash(),
            "a128042177bd93dd831164103d53b73ef790d56f51dae647064cb8f9d9fc9d1a"
        );
        assert_eq!(
            PersistedOperation::ConceptById.default_hash(),
            "cc90404ac049d935afbd9968aef523da2b6723abfb9d586e5f77ebf7c5289006"
        );
        assert_eq!(
            PersistedOperation::CategoryGrid.default_hash(),
            "4ce7d410a4db2c8b635a48c1dcec375906ff63b19dadd87e073f8fd0c0481d35"
        );
    }

    #[test]
    fn test_every_hash_is_64_lowercase_hex_chars() {
        for op in PersistedOperation::all() {
            let hash = op.default_hash();
            assert_eq!(hash.len(), 64, "{op}");
            assert!(
                hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "{op}"
            );
        }
    }

    #[test]
    fn test_names_are_unique_and_round_trip_through_from_name() {
        let names: HashSet<_> = PersistedOperation::all().iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), PersistedOperation::ALL.len());

        for op in PersistedOperation::all() {
            assert_eq!(PersistedOperation::from_name(op.name()), Some(*op));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(PersistedOperation::from_name("ProductById"), None);
        assert_eq!(PersistedOperation::from_name(""), None);
    }
}
