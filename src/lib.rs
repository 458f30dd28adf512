//! Portfolio Website Backend
//!
//! Serves the typed résumé content model and the password-gated CV download
//! endpoint, plus the client-state components (visibility trigger, typewriter,
//! color-mode manager) used by the portfolio UI.

pub mod api;
pub mod config;
pub mod content;
pub mod download;
pub mod effects;
pub mod errors;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use download::ArtifactStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub artifact: Arc<ArtifactStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let artifact = Arc::new(ArtifactStore::from_config(&config));
        Self {
            config: Arc::new(config),
            artifact,
        }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/resume", get(api::get_resume))
        .route("/download-cv", post(api::download_cv));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
