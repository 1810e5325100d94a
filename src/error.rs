//! Unified error handling for the API.
//!
//! Handlers return `ApiResult` and use `?`; `IntoResponse` maps each variant
//! to a status code and an opaque JSON body, logging the root cause at the
//! conversion point so operators can find it without it leaking to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Unified error type for API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Service-account credential failure (startup path)
    #[error("credential backend failure: {0}")]
    AuthBackend(anyhow::Error),

    /// A spreadsheet read or write failed
    #[error("spreadsheet backend unavailable: {0}")]
    Upstream(anyhow::Error),

    /// A required range came back empty
    #[error("no data found in {0}")]
    NoData(String),

    /// No member row matched the submitted pair
    #[error("invalid member id or mobile number")]
    InvalidCredentials,

    /// Anything else
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::AuthBackend(e) => {
                tracing::error!("Credential backend error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error during login".to_string(),
                )
            }
            ApiError::Upstream(e) => {
                tracing::error!("Spreadsheet backend error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access spreadsheet backend".to_string(),
                )
            }
            ApiError::NoData(range) => {
                tracing::warn!("Empty required range: {}", range);
                (StatusCode::NOT_FOUND, "No user data found".to_string())
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID or mobile number".to_string(),
            ),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details: None,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
