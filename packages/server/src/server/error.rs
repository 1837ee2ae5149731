//! Boundary error type.
//!
//! Every failure leaves the server as `{ "error": string }`. Validation
//! problems are 400s; anything that went wrong fetching or processing the
//! remote page is a 500 prefixed with `Failed to fetch content: `.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use content_extractor::ExtractionError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Prefix on every server-side failure message.
pub const FETCH_FAILURE_PREFIX: &str = "Failed to fetch content: ";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body was not a JSON object with an optional string `url`
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field.
    pub fn message(&self) -> String {
        match self {
            ApiError::Extraction(e) if !e.is_client_error() => {
                format!("{FETCH_FAILURE_PREFIX}{e}")
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            warn!(status = %status, error = %message, "Request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
