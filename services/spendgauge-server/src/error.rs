//! API error handling
//!
//! The externally visible failure surface is small: malformed request
//! bodies are rejected by the `Json` extractor with 400, and a full
//! event buffer under the reject policy maps to 429. Degenerate payload
//! fields are not errors; they coerce to zero-valued transactions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use spendgauge_intake::StoreError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced as HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// The event store refused the append
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::QueueFull { .. }) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = %status, error = %self, "request failed");
        let body = Json(json!({
            "queued": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_full_maps_to_429() {
        let err = ApiError::from(StoreError::QueueFull { capacity: 8 });
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }
}
