//! Structured error responses shared by all HTTP services.
//!
//! Every error leaving a handler is rendered as an [`ErrorResponse`] body
//! so clients always see the same shape: a numeric code, a stable string
//! identifier, a message, and optional structured details.

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Wire format for error bodies.
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Request validation failed",
///   "details": { "title": [ ... ] }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric code, stable across releases, for logs and monitoring
    pub code: i32,
    /// Machine-readable identifier such as "VALIDATION_ERROR"
    pub error: String,
    /// Human-readable explanation
    pub message: String,
    /// Extra structure when available, e.g. per-field validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// The error type handlers bubble up to the HTTP layer.
///
/// Domain errors convert into this via `From` impls; the `IntoResponse`
/// impl decides status code, logging level, and body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Split the error into the pieces the response body needs.
    ///
    /// Server-side faults are logged at error level here, client faults
    /// at info, so call sites never have to log separately.
    fn into_parts(self) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
        match self {
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!("Body extraction rejected: {:?}", rejection);
                // axum already picked the right status (400/415/422)
                (
                    rejection.status(),
                    ErrorCode::JsonExtraction,
                    rejection.body_text(),
                    None,
                )
            }
            AppError::ValidationError(errors) => {
                tracing::info!("Payload failed validation: {:?}", errors);
                let code = ErrorCode::ValidationError;
                let details = serde_json::to_value(&errors).ok();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    code,
                    code.default_message().to_string(),
                    details,
                )
            }
            AppError::NotFound(message) => {
                tracing::info!("Not found: {}", message);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, message, None)
            }
            AppError::UnprocessableEntity(message) => {
                tracing::info!("Unprocessable entity: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::UnprocessableEntity,
                    message,
                    None,
                )
            }
            AppError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    message,
                    None,
                )
            }
            AppError::ServiceUnavailable(message) => {
                tracing::warn!("Service unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable,
                    message,
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.into_parts();

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_renders_as_404() {
        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_renders_as_500() {
        let response =
            AppError::InternalServerError("Database not configured".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_render_as_422_with_details() {
        let mut errors = ValidationErrors::new();
        let mut error = validator::ValidationError::new("length");
        error.message = Some("must not be empty".into());
        errors.add("title", error);

        let (status, code, _, details) = AppError::ValidationError(errors).into_parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, ErrorCode::ValidationError);
        assert!(details.unwrap().get("title").is_some());
    }

    #[test]
    fn unprocessable_entity_keeps_its_message() {
        let (status, _, message, _) =
            AppError::UnprocessableEntity("price out of range".to_string()).into_parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message, "price out of range");
    }
}
