pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::services::backend_client::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds shared state from configuration. The backend client is
    /// constructed once here and never mutated afterwards.
    pub fn new(config: AppConfig) -> Self {
        let backend = BackendClient::new(&config.backend_url, &config.backend_api_key);

        Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
        }
    }
}

/// Builds the application router: auth proxy routes, the fund listing
/// endpoint, the error/not-found pages, and shared layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth/magic-link", post(handlers::magic_link_handler))
        .route("/auth/callback", get(handlers::callback_handler))
        .route("/auth/logout", post(handlers::logout_handler))
        .route("/auth/error", get(handlers::auth_error_page))
        .route("/api/funds", get(handlers::list_funds_handler))
        .fallback(handlers::not_found_handler)
        .layer(axum_middleware::from_fn(
            middleware::dynamic_rendering_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
