//! Application setup and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use content_extractor::{Extractor, HttpFetcher, PageFetcher};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, DEFAULT_SOUNDS_DIR};
use crate::server::routes::{
    fetch_content_handler, health_handler, knowledge_handler, sounds_handler,
};

/// Extractor shared by all requests. The fetcher is type-erased so tests can
/// swap in a mock.
pub type SharedExtractor = Arc<Extractor<Arc<dyn PageFetcher>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: SharedExtractor,
    pub started_at: DateTime<Utc>,
    /// Directory of generated ambient tracks served under `/sounds`
    pub sounds_dir: PathBuf,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            extractor: Arc::new(Extractor::new(fetcher)),
            started_at: Utc::now(),
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
        }
    }

    pub fn with_sounds_dir(mut self, sounds_dir: impl Into<PathBuf>) -> Self {
        self.sounds_dir = sounds_dir.into();
        self
    }

    /// State backed by a real HTTP fetcher built from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::with_config(config.fetch_config())
            .context("Failed to create HTTP fetcher")?;
        Ok(Self::new(Arc::new(fetcher)).with_sounds_dir(config.sounds_dir.clone()))
    }
}

/// CORS layer: any origin when `allowed_origins` is empty, otherwise only the
/// listed ones. Unparseable origins are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let sound_files = ServeDir::new(&state.sounds_dir);

    Router::new()
        .route("/api/fetch-content", post(fetch_content_handler))
        .route("/api/knowledge", get(knowledge_handler))
        .route("/api/sounds", get(sounds_handler))
        .route("/health", get(health_handler))
        .nest_service("/sounds", sound_files)
        // Middleware layers (outermost first inside ServiceBuilder)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins))
                .layer(Extension(state)),
        )
}
