// src/services/delivery.rs

//! Webhook delivery.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::error::Result;
use crate::models::{DiscordConfig, NotificationPayload};
use crate::utils::http::create_async_client;

/// What happened to a payload handed to a [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Payload was logged locally and not sent
    DryRun,
    /// Webhook accepted the payload with this status
    Delivered { status: u16 },
}

impl DeliveryOutcome {
    /// Short label used in run summaries.
    pub fn label(&self) -> String {
        match self {
            Self::DryRun => "dry-run".to_string(),
            Self::Delivered { status } => status.to_string(),
        }
    }
}

/// Destination for a formatted notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<DeliveryOutcome>;
}

/// Posts payloads to a Discord webhook.
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a webhook notifier from configuration; fails if no URL is set.
    pub fn from_config(config: &DiscordConfig, timeout_secs: Option<u64>) -> Result<Self> {
        let url = config.require_webhook()?;
        let client = create_async_client(Some(&config.user_agent), timeout_secs)?;
        Ok(Self::new(client, url))
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<DeliveryOutcome> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status().as_u16();
        log::info!("Sent request with status code: {status}");
        Ok(DeliveryOutcome::Delivered { status })
    }
}

/// Logs payloads instead of sending them.
#[derive(Debug, Default)]
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<DeliveryOutcome> {
        log::info!("Dry run, not sending: {}", serde_json::to_string(payload)?);
        Ok(DeliveryOutcome::DryRun)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_dry_run_notifier() {
        let outcome = DryRunNotifier
            .deliver(&NotificationPayload::default())
            .await
            .unwrap();
        assert_eq!(outcome, DeliveryOutcome::DryRun);
    }

    #[test]
    fn test_from_config_requires_webhook() {
        assert!(DiscordWebhook::from_config(&DiscordConfig::default(), None).is_err());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(DeliveryOutcome::Delivered { status: 204 }).unwrap(),
            json!({ "kind": "delivered", "status": 204 })
        );
        assert_eq!(DeliveryOutcome::DryRun.label(), "dry-run");
        assert_eq!(DeliveryOutcome::Delivered { status: 204 }.label(), "204");
    }
}
