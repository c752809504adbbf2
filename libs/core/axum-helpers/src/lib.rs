//! Shared building blocks for the workspace's axum services.
//!
//! - [`server`]: router construction, liveness endpoint, graceful shutdown
//! - [`http`]: CORS and security-header middleware
//! - [`errors`]: the [`AppError`]/[`ErrorResponse`] error surface
//! - [`extractors`]: request extractors such as [`ValidatedJson`]
//!
//! A service typically builds its routes, wraps them with
//! `create_router::<ApiDoc>` for the middleware stack and OpenAPI UIs,
//! and hands the result to `create_app`:
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new()).await?;
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthResponse, ShutdownCoordinator, create_app, create_production_app, create_router,
    health_router, shutdown_signal,
};

pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;
