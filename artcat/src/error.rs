//! Error types for artcat
//!
//! Defines the service error type using thiserror and maps each variant
//! onto an HTTP response at the axum boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single validation rule failure on a candidate artist record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field the rule applies to
    pub field: &'static str,
    /// Human-readable description of the violated rule
    pub message: String,
}

/// Main error type for the artcat service
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed filter or pagination input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Candidate record failed one or more field rules
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    /// No record for the requested identifier
    #[error("artist not found")]
    NotFound,
}

/// Convenience Result type using the artcat Error
pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidArgument(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Error::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "violations": violations,
                })),
            )
                .into_response(),
            // Absence is a valid query outcome: empty body, no error payload.
            Error::NotFound => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
