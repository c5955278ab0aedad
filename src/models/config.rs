//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store API endpoint and listing filter
    #[serde(default)]
    pub store: StoreConfig,

    /// Discord webhook delivery settings
    #[serde(default)]
    pub discord: DiscordConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment overrides using the given variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get(env::WEBHOOK_URL) {
            self.discord.webhook_url = Some(url);
        }
        if let Some(id) = get(env::MENTION_ROLE_ID) {
            self.discord.mention_role_id = Some(id);
        }
        if let Some(size) = get(env::PAGE_SIZE) {
            self.store.page_size = size.parse().map_err(|_| {
                AppError::config(format!("{} must be a number, got '{size}'", env::PAGE_SIZE))
            })?;
        }
        if let Some(secs) = get(env::TIMEOUT_SECS) {
            let secs = secs.parse().map_err(|_| {
                AppError::config(format!("{} must be a number, got '{secs}'", env::TIMEOUT_SECS))
            })?;
            self.store.timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let origin = Url::parse(&self.store.origin)?;
        if origin.cannot_be_a_base() {
            return Err(AppError::validation("store.origin must be an absolute URL"));
        }
        if !self.store.graphql_path.starts_with('/') {
            return Err(AppError::validation("store.graphql_path must start with '/'"));
        }
        if self.store.page_size == 0 {
            return Err(AppError::validation("store.page_size must be > 0"));
        }
        if self.store.timeout_secs == Some(0) {
            return Err(AppError::validation("store.timeout_secs must be > 0"));
        }
        if self.discord.user_agent.trim().is_empty() {
            return Err(AppError::validation("discord.user_agent is empty"));
        }
        if let Some(webhook) = &self.discord.webhook_url {
            Url::parse(webhook)?;
        }
        Ok(())
    }
}

/// Environment variable names recognised by [`Config::apply_env`].
pub mod env {
    pub const WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
    pub const MENTION_ROLE_ID: &str = "DISCORD_MENTION_ROLE_ID";
    pub const PAGE_SIZE: &str = "LTI_PAGE_SIZE";
    pub const TIMEOUT_SECS: &str = "LTI_TIMEOUT_SECS";
    pub const CONFIG_PATH: &str = "LTI_TRACKER_CONFIG";
}

/// Store API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storefront origin, used for the GraphQL endpoint and relative links
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Path of the GraphQL endpoint below the origin
    #[serde(default = "defaults::graphql_path")]
    pub graphql_path: String,

    /// Items requested per listing page
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// Store product the listing is filtered to
    #[serde(default = "defaults::product_id")]
    pub product_id: u32,

    /// Facet identifier of the ship sale category
    #[serde(default = "defaults::facet")]
    pub facet: String,

    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), self.graphql_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            graphql_path: defaults::graphql_path(),
            page_size: defaults::page_size(),
            product_id: defaults::product_id(),
            facet: defaults::facet(),
            accept_language: defaults::accept_language(),
            timeout_secs: None,
        }
    }
}

/// Discord webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Webhook destination; only required for live delivery
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Role mentioned at the start of the announcement
    #[serde(default)]
    pub mention_role_id: Option<String>,

    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Fallback for missing thumbnails and shop links
    #[serde(default = "defaults::placeholder_image_url")]
    pub placeholder_image_url: String,

    /// Embed accent color
    #[serde(default = "defaults::embed_color")]
    pub embed_color: u32,
}

impl DiscordConfig {
    /// Webhook URL required for a live delivery.
    pub fn require_webhook(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| AppError::config(format!("{} is not set", env::WEBHOOK_URL)))
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            mention_role_id: None,
            user_agent: defaults::user_agent(),
            placeholder_image_url: defaults::placeholder_image_url(),
            embed_color: defaults::embed_color(),
        }
    }
}

mod defaults {
    // Store defaults
    pub fn origin() -> String {
        "https://robertsspaceindustries.com".into()
    }
    pub fn graphql_path() -> String {
        "/graphql".into()
    }
    pub fn page_size() -> u32 {
        10
    }
    pub fn product_id() -> u32 {
        72
    }
    pub fn facet() -> String {
        "extras-standalone-ships".into()
    }
    pub fn accept_language() -> String {
        "en-US,en;q=0.9".into()
    }

    // Discord defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (X11; U; Linux i686) Gecko/20071127 Firefox/2.0.0.11".into()
    }
    pub fn placeholder_image_url() -> String {
        "https://www.google.com/images/errors/robot.png".into()
    }
    pub fn embed_color() -> u32 {
        5814783
    }
}
