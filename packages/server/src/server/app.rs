//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::housekeeping::{BoardService, PgInventoryStore};
use crate::server::routes::{health_handler, housekeeping};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub board: Arc<BoardService>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    // The board talks to Postgres through the store seam; the pool stays in
    // state for the health probe.
    let store = Arc::new(PgInventoryStore::new(pool.clone()));
    let board = Arc::new(BoardService::new(store, config.store_timeout));

    let app_state = AppState {
        db_pool: pool,
        board,
    };

    // CORS configuration - explicit origins when configured, any origin for
    // development
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PUT])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::PUT])
            .allow_headers([CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/housekeeping", housekeeping::router())
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
