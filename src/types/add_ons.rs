use serde::{Deserialize, Serialize};

use crate::types::common::PageInfo;
use crate::types::product::Product;

/// Add-ons of a title, as returned by `metGetAddOnsByTitleId`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOnProducts {
    pub add_on_products: Option<Vec<Product>>,
    pub page_info: Option<PageInfo>,
}
