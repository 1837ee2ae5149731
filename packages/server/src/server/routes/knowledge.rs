use axum::Json;

use crate::knowledge::{guidelines, Guideline};

/// Knowledge hub catalog
pub async fn knowledge_handler() -> Json<&'static [Guideline]> {
    Json(guidelines())
}
