//! MongoDB liveness probes

use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome of a detailed health probe.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Ask the server to list its databases; any answer means it is up.
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}

/// Like [`check_health`], but keeps the error text and the round-trip
/// time for surfacing in a health endpoint.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let started = Instant::now();
    let outcome = client.list_database_names().await;
    let response_time_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
