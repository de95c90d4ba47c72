//! PlayStation Plus subscription offers.

use serde::{Deserialize, Serialize};

use crate::types::common::Price;

/// Offers of one PlayStation Plus tier, as returned by `featuresRetrieve`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TierSelectorOffers {
    pub offers: Option<Vec<SubscriptionOffer>>,
}

/// A subscription SKU (e.g. 12 months of PlayStation Plus Extra).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionOffer {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sku_id: Option<String>,
    pub price: Option<Price>,
}
