//! Response types for the Leave Accrual Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn config_error(message: &str, details: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details("CONFIG_ERROR", message, details),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let description = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => Self::config_error(
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => Self::config_error(
                "Configuration parse error",
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::InvalidPolicy { field, message } => Self::config_error(
                "Invalid accrual policy",
                format!("Policy field '{}': {}", field, message),
            ),
            EngineError::InvalidDateRange { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE_RANGE",
                description,
                "Termination and reference dates must not precede the hire date",
            )),
            EngineError::InvalidDate { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE",
                description,
                "Dates must be calendar dates in YYYY-MM-DD format",
            )),
            EngineError::UnsupportedConvention { .. } => Self::bad_request(ApiError::with_details(
                "UNSUPPORTED_CONVENTION",
                description,
                "Supported conventions are 'anniversary' and 'fiscal'",
            )),
            EngineError::InvalidHorizon { .. } => {
                Self::bad_request(ApiError::new("INVALID_HORIZON", description))
            }
        }
    }
}
