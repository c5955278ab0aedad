//! Store GraphQL response shapes.
//!
//! Every level of the response is optional. A missing or null container yields
//! no data for that branch instead of an error. Fields and entries whose JSON
//! does not match the expected shape read as absent, so that their siblings
//! are still processed.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

use super::SaleRecord;

/// Game item name that marks a SKU as sold with Lifetime Insurance.
pub const LIFETIME_INSURANCE: &str = "Lifetime Insurance";

/// A value that deserializes to `None` instead of failing when its JSON
/// is null or has an unexpected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tolerant<T>(pub Option<T>);

impl<T> Tolerant<T> {
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> Default for Tolerant<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Tolerant<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(serde_json::from_value(value).ok()))
    }
}

/// Field deserializer that reads a null or mistyped value as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Tolerant::<T>::deserialize(deserializer)?.0)
}

/// Reads a price amount in minor units. Whole-number floats are accepted.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

/// One element of a batched GraphQL response.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreResponse {
    #[serde(deserialize_with = "lenient")]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ResponseData {
    #[serde(deserialize_with = "lenient")]
    pub store: Option<StoreNode>,
}

/// The `store` node; `listing` is the aliased browse search, `search` the SKU lookup.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreNode {
    #[serde(deserialize_with = "lenient")]
    pub listing: Option<ListingPage>,
    #[serde(deserialize_with = "lenient")]
    pub search: Option<SearchBatch>,
}

impl StoreResponse {
    /// Split a batched response body into its elements.
    ///
    /// A body that is a single object is treated as a one-element batch.
    /// Elements that cannot be read are logged and skipped.
    pub fn from_batch(body: Value) -> Vec<Self> {
        let elements = match body {
            Value::Array(elements) => elements,
            Value::Object(_) => vec![body],
            other => {
                log::warn!("Ignoring store response that is not a JSON array: {other}");
                return Vec::new();
            }
        };

        elements
            .into_iter()
            .filter_map(|element| match serde_json::from_value(element) {
                Ok(response) => Some(response),
                Err(e) => {
                    log::warn!("Ignoring unreadable store response element: {e}");
                    None
                }
            })
            .collect()
    }

    /// The listing page at `data.store.listing`, if present.
    pub fn listing(&self) -> Option<&ListingPage> {
        self.data.as_ref()?.store.as_ref()?.listing.as_ref()
    }

    /// The SKU search batch at `data.store.search`, if present.
    pub fn search(&self) -> Option<&SearchBatch> {
        self.data.as_ref()?.store.as_ref()?.search.as_ref()
    }
}

/// One page of the ship sale listing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingPage {
    #[serde(deserialize_with = "lenient")]
    pub resources: Option<Vec<Tolerant<ListingResource>>>,
    /// Items on this page
    #[serde(deserialize_with = "lenient")]
    pub count: Option<u64>,
    /// Items matching the filter across all pages
    #[serde(deserialize_with = "lenient")]
    pub total_count: Option<u64>,
}

impl ListingPage {
    /// Non-empty slugs on this page, in listing order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.resources
            .iter()
            .flatten()
            .filter_map(Tolerant::get)
            .filter_map(|resource| resource.slug.as_deref())
            .filter(|slug| !slug.is_empty())
    }

    /// Whether another page follows `page` when pages hold `limit` items.
    ///
    /// A page without both counts ends the walk.
    pub fn has_more(&self, page: u32, limit: u32) -> bool {
        match (self.count, self.total_count) {
            (Some(count), Some(total)) => {
                let fetched = u64::from(limit) * u64::from(page.saturating_sub(1)) + count;
                fetched < total
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ListingResource {
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
}

/// Result of a SKU lookup by slug.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchBatch {
    #[serde(deserialize_with = "lenient")]
    pub count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub resources: Option<Vec<Tolerant<SkuResource>>>,
}

impl SearchBatch {
    pub fn resources(&self) -> impl Iterator<Item = &SkuResource> {
        self.resources.iter().flatten().filter_map(Tolerant::get)
    }
}

/// Commerce details for a single SKU.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkuResource {
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_warbond: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub price: Option<Price>,
    #[serde(deserialize_with = "lenient")]
    pub image_composer: Option<Vec<Tolerant<ImageComposer>>>,
    #[serde(deserialize_with = "lenient")]
    pub game_items: Option<Vec<Tolerant<GameItem>>>,
}

impl SkuResource {
    /// Whether one of the bundled game items is Lifetime Insurance.
    pub fn has_lifetime_insurance(&self) -> bool {
        self.game_items
            .iter()
            .flatten()
            .filter_map(Tolerant::get)
            .any(|item| item.name.as_deref() == Some(LIFETIME_INSURANCE))
    }

    /// URL of the first image composer entry.
    pub fn thumbnail(&self) -> Option<&str> {
        self.image_composer
            .as_ref()?
            .first()?
            .get()?
            .url
            .as_deref()
    }

    pub fn to_sale_record(&self) -> SaleRecord {
        SaleRecord {
            name: self.name.clone(),
            subtitle: self.subtitle.clone(),
            is_warbond: self.is_warbond.unwrap_or(false),
            price_amount_cents: self.price.as_ref().and_then(|p| p.amount),
            shop_url_path: self.url.clone(),
            thumbnail_url_path: self.thumbnail().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Price {
    /// Minor currency units
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ImageComposer {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct GameItem {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}
