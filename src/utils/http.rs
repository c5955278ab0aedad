// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::StoreConfig;

/// Something that can post a GraphQL batch to the store and return the parsed JSON.
#[async_trait]
pub trait StoreTransport: Send + Sync {
    async fn post_batch(&self, body: &Value) -> Result<Value>;
}

/// Create a configured asynchronous HTTP client.
///
/// No timeout is applied unless one is configured.
pub fn create_async_client(user_agent: Option<&str>, timeout_secs: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent);
    }
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Store transport backed by `reqwest`.
pub struct HttpStoreTransport {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl HttpStoreTransport {
    /// Create a transport for the store's GraphQL endpoint.
    pub fn new(client: Client, store: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&store.accept_language).map_err(|e| {
                AppError::config(format!("invalid store.accept_language: {e}"))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            endpoint: store.graphql_url(),
            headers,
        })
    }

    /// Create a transport with its own client.
    pub fn from_config(store: &StoreConfig) -> Result<Self> {
        let client = create_async_client(None, store.timeout_secs)?;
        Self::new(client, store)
    }
}

#[async_trait]
impl StoreTransport for HttpStoreTransport {
    async fn post_batch(&self, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
