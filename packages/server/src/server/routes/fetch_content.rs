//! Content fetch endpoint.
//!
//! `POST /api/fetch-content` with `{ "url": "..." }` answers
//! `{ title, content, url }`, or `{ error }` with 400/500.

use axum::{body::Bytes, extract::Extension, Json};
use content_extractor::{ExtractionRequest, ExtractionResult};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Parse the request body leniently: the `Content-Type` header is not
/// required and an empty body counts as a request with no `url`.
fn parse_request(body: &[u8]) -> Result<ExtractionRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ExtractionRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

pub async fn fetch_content_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<ExtractionResult>, ApiError> {
    let request = parse_request(&body)?;

    let result = state.extractor.extract_request(&request).await?;
    Ok(Json(result))
}
