//! API routes module
//!
//! This module defines all HTTP routes for the catalog API.

pub mod diagnostics;
pub mod health;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;
use domain_catalog::{CatalogService, MongoProductRepository, handlers};

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let service = match &state.db {
        Some(db) => CatalogService::new(MongoProductRepository::new(db)),
        None => CatalogService::disconnected(),
    };

    Router::new()
        .route("/hello", get(hello))
        .merge(handlers::router(service))
}

/// Create the root-level routes that live outside the /api prefix
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/schema", get(handlers::product_schema))
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Karachi Couture Backend is running" }))
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Welcome to Karachi Couture API" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_and_hello_report_their_messages() {
        let app = Router::new()
            .route("/", get(root))
            .route("/api/hello", get(hello));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Karachi Couture Backend is running");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Welcome to Karachi Couture API");
    }
}
