//! Router setup.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use jmerge_config::Config;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared application context passed to all handlers.
///
/// Cloning is cheap; the configuration is read-only after startup.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
}

/// Build the application router.
pub fn router(config: Config) -> Router {
    let max_upload_bytes = config.max_upload_bytes;
    let ctx = AppContext {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/export", post(handlers::export))
        .route("/preview", post(handlers::preview))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
