//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by HTTP handlers.
///
/// Client defects carry specific messages; upstream and internal failures
/// collapse to generic ones, with details logged but never surfaced.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body (400). The message names the defect.
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown meeting id (404).
    #[error("Meeting not found")]
    NotFound,

    /// The model rejected the constructed history shape (400).
    #[error("Invalid conversation history format. Please try starting a new conversation.")]
    InvalidHistoryShape,

    /// Anything else (500).
    #[error("An internal server error occurred. Please try again.")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) | ApiError::InvalidHistoryShape => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(err) => {
                error!("Internal error: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
