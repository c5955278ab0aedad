// src/services/details.rs

//! SKU detail service.
//!
//! Resolves candidate slugs into sale records, keeping only the SKUs that
//! bundle Lifetime Insurance.

use crate::error::Result;
use crate::models::{SaleRecord, SkuResource, StoreResponse};
use crate::queries::skus_request;
use crate::utils::http::StoreTransport;

/// Service for looking up commerce details of listed SKUs.
pub struct DetailFetcher<'a> {
    transport: &'a dyn StoreTransport,
}

impl<'a> DetailFetcher<'a> {
    pub fn new(transport: &'a dyn StoreTransport) -> Self {
        Self { transport }
    }

    /// Fetch details for `slugs` in one batch and return the LTI sale records.
    ///
    /// Makes no request when `slugs` is empty.
    pub async fn fetch_sale_details(&self, slugs: &[String]) -> Result<Vec<SaleRecord>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let body = serde_json::to_value(skus_request(slugs))?;
        let response = self.transport.post_batch(&body).await?;

        let mut records = Vec::new();
        for element in StoreResponse::from_batch(response) {
            let Some(search) = element.search() else {
                continue;
            };

            let requested = slugs.len() as u64;
            if search.count != Some(requested) {
                log::warn!(
                    "SKU search count mismatch: requested {} slug(s), store reported {}",
                    requested,
                    search
                        .count
                        .map_or_else(|| "no count".to_string(), |c| c.to_string())
                );
            }

            records.extend(
                search
                    .resources()
                    .filter(|sku| sku.has_lifetime_insurance())
                    .map(SkuResource::to_sale_record),
            );
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::testing::{FakeTransport, capture_logs, logged_lines, search_batch, sku};

    fn slugs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_slugs_make_no_request() {
        let transport = FakeTransport::new(|_| panic!("no request expected"));

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&[])
            .await
            .unwrap();

        assert!(records.is_empty());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_only_lifetime_insurance_qualifies() {
        let transport = FakeTransport::new(|_| {
            search_batch(
                3,
                vec![
                    sku("Idris-P", &["Idris-P", "Lifetime Insurance"]),
                    sku("Cutlass", &["Cutlass", "120 Months Insurance"]),
                    sku("Hull-E", &["Lifetime Insurance"]),
                ],
            )
        });

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["idris-p", "cutlass", "hull-e"]))
            .await
            .unwrap();

        let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["Idris-P", "Hull-E"]);
        assert_eq!(transport.operations(), vec!["GetSkus"]);
    }

    #[tokio::test]
    async fn test_request_carries_all_slugs() {
        let transport = FakeTransport::new(|_| search_batch(0, Vec::new()));

        DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["a", "b", "c"]))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0][0]["variables"]["query"]["skus"]["slugs"],
            json!(["a", "b", "c"])
        );
    }

    #[tokio::test]
    async fn test_malformed_resources_are_isolated() {
        let transport = FakeTransport::new(|_| {
            search_batch(
                5,
                vec![
                    json!(null),
                    json!({ "name": "No items", "gameItems": null }),
                    json!({ "name": "Null item", "gameItems": [null] }),
                    json!("not an object"),
                    sku("Carrack", &["Lifetime Insurance"]),
                ],
            )
        });

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["a", "b", "c", "d", "carrack"]))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Carrack"));
        assert_eq!(records[0].price_amount_cents, Some(100000));
        assert_eq!(
            records[0].thumbnail_url_path.as_deref(),
            Some("/media/Carrack.jpg")
        );
    }

    #[tokio::test]
    async fn test_mistyped_fields_keep_the_ship() {
        let mut float_price = sku("Idris-P", &["Lifetime Insurance"]);
        float_price["price"] = json!({ "amount": 150000.0 });
        let mut bad_subtitle = sku("Javelin", &["Lifetime Insurance"]);
        bad_subtitle["subtitle"] = json!(7);
        bad_subtitle["isWarbond"] = json!("yes");
        let mut bad_price = sku("Polaris", &["Lifetime Insurance"]);
        bad_price["price"] = json!({ "amount": "free" });

        let transport = FakeTransport::new(move |_| {
            search_batch(
                3,
                vec![float_price.clone(), bad_subtitle.clone(), bad_price.clone()],
            )
        });

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["idris-p", "javelin", "polaris"]))
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].price_amount_cents, Some(150000));
        assert_eq!(records[1].name.as_deref(), Some("Javelin"));
        assert_eq!(records[1].subtitle, None);
        assert!(!records[1].is_warbond);
        assert_eq!(records[1].price_amount_cents, Some(100000));
        assert_eq!(records[2].name.as_deref(), Some("Polaris"));
        assert_eq!(records[2].price_amount_cents, None);
    }

    #[tokio::test]
    async fn test_count_mismatch_warns_and_continues() {
        capture_logs();
        let transport = FakeTransport::new(|_| {
            search_batch(1, vec![sku("Idris-P", &["Lifetime Insurance"])])
        });

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["idris-p", "javelin", "a", "b", "c", "d", "e"]))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        let warnings = logged_lines("requested 7 slug(s), store reported 1");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("WARN SKU search count mismatch"));
    }

    #[tokio::test]
    async fn test_missing_search_yields_nothing() {
        let transport = FakeTransport::new(|_| json!([{ "data": { "store": { "search": null } } }]));

        let records = DetailFetcher::new(&transport)
            .fetch_sale_details(&slugs(&["idris-p"]))
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
