// src/pipeline/run.rs

//! Single-pass tracker run: listing, details, formatting, delivery.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::Config;
use crate::services::{
    DeliveryOutcome, DetailFetcher, DiscordWebhook, DryRunNotifier, ListingFetcher,
    NotificationFormatter, Notifier,
};
use crate::utils::http::{HttpStoreTransport, StoreTransport};

/// Summary of one tracker run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    /// Slugs found on the ship sale listing
    pub candidate_count: usize,
    /// Ships confirmed to carry Lifetime Insurance
    pub ship_count: usize,
    pub delivery: DeliveryOutcome,
    pub finished_at: DateTime<Utc>,
}

/// Run the tracker against the live store.
///
/// With `dry_run` the payload is logged instead of posted to the webhook.
pub async fn run_tracker(config: &Config, dry_run: bool) -> Result<RunReport> {
    let transport = HttpStoreTransport::from_config(&config.store)?;

    if dry_run {
        run_with(&transport, &DryRunNotifier, config).await
    } else {
        let webhook = DiscordWebhook::from_config(&config.discord, config.store.timeout_secs)?;
        run_with(&transport, &webhook, config).await
    }
}

/// Run the tracker with the given transport and notifier.
pub async fn run_with(
    transport: &dyn StoreTransport,
    notifier: &dyn Notifier,
    config: &Config,
) -> Result<RunReport> {
    log::info!("Step 1/3: Fetching ship sale listing...");
    let slugs = ListingFetcher::new(transport, &config.store)
        .fetch_lti_candidate_slugs()
        .await?;
    log::info!("Found {} candidate slug(s)", slugs.len());

    log::info!("Step 2/3: Fetching SKU details...");
    let records = DetailFetcher::new(transport)
        .fetch_sale_details(&slugs)
        .await?;
    log::info!("{} ship(s) on sale with LTI", records.len());

    log::info!("Step 3/3: Sending notification...");
    let payload = NotificationFormatter::new(config).format_notification(&records);
    let delivery = notifier.deliver(&payload).await?;

    Ok(RunReport {
        dry_run: delivery == DeliveryOutcome::DryRun,
        candidate_count: slugs.len(),
        ship_count: records.len(),
        delivery,
        finished_at: Utc::now(),
    })
}
