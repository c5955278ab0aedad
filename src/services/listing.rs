// src/services/listing.rs

//! Ship sale listing service.
//!
//! Walks the paginated store listing for the ship sale category and collects
//! the slug of every item on it.

use crate::error::Result;
use crate::models::{StoreConfig, StoreResponse};
use crate::queries::listing_request;
use crate::utils::http::StoreTransport;

/// Slugs and pagination totals read from one listing page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub slugs: Vec<String>,
    /// Items on this page, as reported by the last listing read
    pub count: Option<u64>,
    /// Items matching the filter across all pages
    pub total_count: Option<u64>,
    /// Whether any listing in the response reported more items to fetch
    pub has_more: bool,
}

/// Service for collecting candidate slugs from the store listing.
pub struct ListingFetcher<'a> {
    transport: &'a dyn StoreTransport,
    store: &'a StoreConfig,
}

impl<'a> ListingFetcher<'a> {
    pub fn new(transport: &'a dyn StoreTransport, store: &'a StoreConfig) -> Self {
        Self { transport, store }
    }

    /// Fetch every listing page, in order, and return the slugs found.
    pub async fn fetch_lti_candidate_slugs(&self) -> Result<Vec<String>> {
        let limit = self.store.page_size;
        let mut slugs = Vec::new();
        let mut page = 1;

        loop {
            let result = self.fetch_page(page, limit).await?;
            slugs.extend(result.slugs);

            if !result.has_more {
                break;
            }
            page += 1;
        }

        log::debug!("Listing walk finished after {page} page(s)");
        Ok(slugs)
    }

    /// Fetch a single listing page.
    ///
    /// More pages follow if any listing in the response reports fewer items
    /// fetched than its total.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult> {
        log::info!("Fetching page number {page}");

        let body = serde_json::to_value(listing_request(self.store, page, limit))?;
        let response = self.transport.post_batch(&body).await?;

        let mut result = PageResult::default();
        for element in StoreResponse::from_batch(response) {
            let Some(listing) = element.listing() else {
                continue;
            };
            result.slugs.extend(listing.slugs().map(str::to_string));
            result.count = listing.count;
            result.total_count = listing.total_count;
            result.has_more |= listing.has_more(page, limit);
        }
        Ok(result)
    }
}
