// src/lambda/mod.rs

//! AWS Lambda handler for the tracker.
//!
//! The scheduler invokes the function with a JSON event. An optional
//! `dryrun` field selects a dry run (see [`is_dry_run`]). A failed run is
//! returned as a handler error so the invocation is reported as failed.

use std::time::{Duration, Instant};

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::models::{Config, is_dry_run};
use crate::pipeline::{RunReport, run_tracker};

/// Lambda response payload.
#[derive(Debug, Serialize)]
pub struct TrackerResponse {
    pub status: String,
    pub dry_run: bool,
    /// Slugs found on the listing
    pub candidates: usize,
    /// Ships announced
    pub ships: usize,
    /// Webhook status code, or "dry-run"
    pub delivery_status: String,
    pub execution_time_ms: u64,
}

impl TrackerResponse {
    pub fn from_report(report: &RunReport, elapsed: Duration) -> Self {
        Self {
            status: "success".to_string(),
            dry_run: report.dry_run,
            candidates: report.candidate_count,
            ships: report.ship_count,
            delivery_status: report.delivery.label(),
            execution_time_ms: elapsed.as_millis() as u64,
        }
    }
}

/// Main Lambda handler function.
#[instrument(skip(event, config))]
pub async fn handler(
    event: LambdaEvent<Value>,
    config: &Config,
) -> std::result::Result<TrackerResponse, LambdaError> {
    let start = Instant::now();
    let (payload, _context) = event.into_parts();
    let dry_run = is_dry_run(&payload);

    info!("Starting run: dry_run={}", dry_run);

    match run_tracker(config, dry_run).await {
        Ok(report) => {
            let response = TrackerResponse::from_report(&report, start.elapsed());
            info!(
                "Run completed: {} candidate(s), {} ship(s), delivery {} in {}ms",
                response.candidates,
                response.ships,
                response.delivery_status,
                response.execution_time_ms
            );
            Ok(response)
        }
        Err(e) => {
            error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::services::DeliveryOutcome;

    fn report(delivery: DeliveryOutcome) -> RunReport {
        RunReport {
            dry_run: delivery == DeliveryOutcome::DryRun,
            candidate_count: 12,
            ship_count: 3,
            delivery,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_from_live_report() {
        let response = TrackerResponse::from_report(
            &report(DeliveryOutcome::Delivered { status: 204 }),
            Duration::from_millis(1500),
        );
        assert_eq!(response.status, "success");
        assert!(!response.dry_run);
        assert_eq!(response.candidates, 12);
        assert_eq!(response.ships, 3);
        assert_eq!(response.delivery_status, "204");
        assert_eq!(response.execution_time_ms, 1500);
    }

    #[test]
    fn test_response_from_dry_run() {
        let response =
            TrackerResponse::from_report(&report(DeliveryOutcome::DryRun), Duration::ZERO);
        assert!(response.dry_run);
        assert_eq!(response.delivery_status, "dry-run");
    }
}
