//! AWS Lambda entry point for the LTI tracker
//!
//! Deploy with `cargo lambda build --release --features lambda`
//! and invoke it from a scheduled rule, e.g. with `{"dryrun": "yes"}`.
//!
//! ## Environment Variables
//!
//! - `DISCORD_WEBHOOK_URL`: Webhook the announcement is posted to
//! - `DISCORD_MENTION_ROLE_ID`: Role mentioned in the announcement (optional)
//! - `LTI_TRACKER_CONFIG`: Path to a TOML config file (optional)
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, service_fn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lti_tracker::{config, lambda};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("LTI Tracker Lambda starting...");

    let config = Arc::new(config::load_from_env()?);

    lambda_runtime::run(service_fn(move |event| {
        let config = Arc::clone(&config);
        async move { lambda::handler(event, &config).await }
    }))
    .await
}
