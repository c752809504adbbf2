//! The catalog of error identifiers clients can receive.
//!
//! Each variant carries three faces of the same error: the
//! SCREAMING_SNAKE string clients branch on, a numeric code for logs
//! and dashboards, and a fallback message for when no more specific
//! text is available. Codes are stable once published.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // 1000-1499: the client sent something wrong
    ValidationError,
    NotFound,
    UnprocessableEntity,
    JsonExtraction,

    // 1500-1999: the server failed
    InternalError,
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::NotFound => 1004,
            ErrorCode::UnprocessableEntity => 1008,
            ErrorCode::JsonExtraction => 1009,
            ErrorCode::InternalError => 1500,
            ErrorCode::ServiceUnavailable => 1503,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::UnprocessableEntity => "Request payload is semantically incorrect",
            ErrorCode::JsonExtraction => "Failed to extract JSON from request body",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 6] = [
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::UnprocessableEntity,
        ErrorCode::JsonExtraction,
        ErrorCode::InternalError,
        ErrorCode::ServiceUnavailable,
    ];

    #[test]
    fn the_three_faces_line_up_for_validation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(
            ErrorCode::ValidationError.default_message(),
            "Request validation failed"
        );
    }

    #[test]
    fn numeric_codes_never_collide() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn string_identifiers_never_collide() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.as_str()), "duplicate id {}", code.as_str());
        }
    }
}
