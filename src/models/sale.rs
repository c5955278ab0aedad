//! Sale record data structure.

use serde::{Deserialize, Serialize};

/// A ship or package currently on sale with Lifetime Insurance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleRecord {
    /// Display name
    pub name: Option<String>,

    /// Store category label ("Standalone Ships", "Package", ...)
    pub subtitle: Option<String>,

    pub is_warbond: bool,

    /// Price in minor currency units
    pub price_amount_cents: Option<i64>,

    /// Storefront page, relative or absolute
    pub shop_url_path: Option<String>,

    /// Preview image, relative or absolute
    pub thumbnail_url_path: Option<String>,
}
