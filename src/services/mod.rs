//! Service layer for the tracker.
//!
//! This module contains the business logic for:
//! - Ship sale listing pagination (`ListingFetcher`)
//! - SKU detail lookup (`DetailFetcher`)
//! - Discord message formatting (`NotificationFormatter`)
//! - Webhook delivery (`Notifier`)

mod delivery;
mod details;
mod formatter;
mod listing;

#[cfg(test)]
pub(crate) mod testing;

pub use delivery::{DeliveryOutcome, DiscordWebhook, DryRunNotifier, Notifier};
pub use details::DetailFetcher;
pub use formatter::{NotificationFormatter, format_cents, format_price, format_title, ship_type};
pub use listing::{ListingFetcher, PageResult};
