//! MongoDB client construction, with eager and lazy variants

use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB from a bare URL and verify the server answers.
///
/// Pool size and timeouts get fixed defaults; use
/// [`connect_from_config`] when those need tuning.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    let client = build_client(&MongoConfig::new(url)).await?;
    verify(&client).await?;
    Ok(client)
}

/// Connect using a [`MongoConfig`] and verify the server answers.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let client = build_client(config).await?;
    verify(&client).await?;
    Ok(client)
}

/// Build a client without contacting the server.
///
/// The driver dials on first use, so a service can come up while the
/// database is down or not yet routable; store-touching requests then
/// surface the driver error at call time. Only a malformed URL fails
/// here.
pub async fn connect_lazy(config: &MongoConfig) -> Result<Client, MongoError> {
    build_client(config).await
}

/// Eagerly connect with retry and exponential backoff.
///
/// Pass `None` to use the default retry budget.
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let url = url.to_string();

    match retry_config {
        Some(config) => retry_with_backoff(|| connect(&url), config).await,
        None => retry(|| connect(&url)).await,
    }
}

/// [`connect_from_config`] wrapped in the same retry behavior.
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let config = config.clone();

    match retry_config {
        Some(retry_cfg) => retry_with_backoff(|| connect_from_config(&config), retry_cfg).await,
        None => retry(|| connect_from_config(&config)).await,
    }
}

async fn build_client(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Configuring MongoDB client for {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone().or(options.app_name);

    Ok(Client::with_options(options)?)
}

/// Cheap round trip proving the deployment is reachable.
async fn verify(client: &Client) -> Result<(), MongoError> {
    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn connect_against_live_server() {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        assert!(connect(&url).await.is_ok());
    }

    #[tokio::test]
    async fn lazy_client_builds_without_a_reachable_server() {
        // Closed port; nothing is dialed during construction.
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "test");
        assert!(connect_lazy(&config).await.is_ok());
    }

    #[tokio::test]
    async fn lazy_client_still_rejects_malformed_urls() {
        let config = MongoConfig::with_database("not-a-mongodb-url", "test");
        assert!(connect_lazy(&config).await.is_err());
    }
}
