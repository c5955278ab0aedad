// src/models/mod.rs

//! Domain models for the tracker.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod payload;
mod sale;
mod store;
mod trigger;

// Re-export all public types
pub use config::{Config, DiscordConfig, StoreConfig, env};
pub use payload::{Embed, EmbedField, EmbedImage, NotificationPayload};
pub use sale::SaleRecord;
pub use store::{
    GameItem, ImageComposer, ListingPage, ListingResource, Price, SearchBatch, SkuResource,
    StoreResponse, Tolerant,
};
pub use trigger::is_dry_run;
