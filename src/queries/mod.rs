// src/queries/mod.rs

//! GraphQL request bodies for the store API.
//!
//! The store accepts batched operations, so every body is a JSON array
//! holding a single operation.

use serde::Serialize;
use serde_json::{Value, json};

use crate::models::StoreConfig;

const LISTING_QUERY: &str = include_str!("listing.graphql");
const SKUS_QUERY: &str = include_str!("skus.graphql");

pub const LISTING_OPERATION: &str = "GetBrowseSkusStandaloneShipByFilter";
pub const SKUS_OPERATION: &str = "GetSkus";

/// A single GraphQL operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation<'a> {
    pub operation_name: &'a str,
    pub variables: Value,
    pub query: &'a str,
}

/// Build the ship sale listing request for one page.
pub fn listing_request(store: &StoreConfig, page: u32, limit: u32) -> Vec<Operation<'static>> {
    vec![Operation {
        operation_name: LISTING_OPERATION,
        variables: json!({
            "query": {
                "page": page,
                "limit": limit,
                "skus": {
                    "filtersFromTags": {
                        "tagIdentifiers": [],
                        "facetIdentifiers": [store.facet]
                    },
                    "products": [store.product_id]
                },
                "sort": {
                    "field": "weight",
                    "direction": "desc"
                }
            }
        }),
        query: LISTING_QUERY,
    }]
}

/// Build the SKU detail request for a batch of slugs.
pub fn skus_request(slugs: &[String]) -> Vec<Operation<'static>> {
    vec![Operation {
        operation_name: SKUS_OPERATION,
        variables: json!({
            "query": {
                "skus": {
                    "slugs": slugs,
                    "imageComposer": [],
                    "unslottedMedia": false,
                    "items": {
                        "imageComposer": []
                    }
                }
            }
        }),
        query: SKUS_QUERY,
    }]
}
