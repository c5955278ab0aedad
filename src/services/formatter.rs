// src/services/formatter.rs

//! Discord notification formatting.

use crate::models::{Config, Embed, EmbedField, EmbedImage, NotificationPayload, SaleRecord};
use crate::utils::url::resolve_or;

const ANNOUNCEMENT: &str = "The below ships are on sale with Life Time Insurance (LTI).\n_ _";
const NOTHING_ON_SALE: &str = "There are not currently any ships on sale with LTI.";
const UNKNOWN: &str = "Unknown";

/// Builds the webhook message for a set of sale records.
#[derive(Debug, Clone)]
pub struct NotificationFormatter {
    origin: String,
    placeholder_url: String,
    embed_color: u32,
    mention_role_id: Option<String>,
}

impl NotificationFormatter {
    pub fn new(config: &Config) -> Self {
        Self {
            origin: config.store.origin.trim_end_matches('/').to_string(),
            placeholder_url: config.discord.placeholder_image_url.clone(),
            embed_color: config.discord.embed_color,
            mention_role_id: config.discord.mention_role_id.clone(),
        }
    }

    /// Build the payload: one embed per record, in order.
    pub fn format_notification(&self, records: &[SaleRecord]) -> NotificationPayload {
        if records.is_empty() {
            return NotificationPayload {
                content: NOTHING_ON_SALE.to_string(),
                ..NotificationPayload::default()
            };
        }

        NotificationPayload {
            content: self.content(),
            embeds: records.iter().map(|r| self.embed(r)).collect(),
            attachments: Vec::new(),
        }
    }

    fn content(&self) -> String {
        match &self.mention_role_id {
            Some(id) => format!("<@&{id}> {ANNOUNCEMENT}"),
            None => ANNOUNCEMENT.to_string(),
        }
    }

    fn embed(&self, record: &SaleRecord) -> Embed {
        Embed {
            title: format_title(record),
            url: self.shop_url(record),
            color: self.embed_color,
            fields: vec![
                EmbedField::inline("Price", format_price(record)),
                EmbedField::inline("Type", ship_type(record)),
            ],
            image: EmbedImage {
                url: self.thumbnail_url(record),
            },
        }
    }

    /// Storefront link; falls back to the placeholder image like the thumbnail does.
    pub fn shop_url(&self, record: &SaleRecord) -> String {
        resolve_or(
            &self.origin,
            record.shop_url_path.as_deref(),
            &self.placeholder_url,
        )
    }

    pub fn thumbnail_url(&self, record: &SaleRecord) -> String {
        resolve_or(
            &self.origin,
            record.thumbnail_url_path.as_deref(),
            &self.placeholder_url,
        )
    }
}

/// Embed title, prefixed with "Warbond " for warbond offers.
pub fn format_title(record: &SaleRecord) -> String {
    match &record.name {
        Some(name) if record.is_warbond => format!("Warbond {name}"),
        Some(name) => name.clone(),
        None => UNKNOWN.to_string(),
    }
}

pub fn format_price(record: &SaleRecord) -> String {
    record
        .price_amount_cents
        .map_or_else(|| UNKNOWN.to_string(), format_cents)
}

/// Format minor units as dollars with two decimals and thousands separators.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}.{:02}", abs % 100)
}

/// Classify a record by its store subtitle.
pub fn ship_type(record: &SaleRecord) -> &'static str {
    match record.subtitle.as_deref() {
        Some("Standalone Ships") => "Ship",
        Some("Package") => "Game Package",
        _ => UNKNOWN,
    }
}
