//! Portfolio backend server entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_backend::config::{self, Config};
use portfolio_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    match &config.cv_path {
        Some(path) => tracing::info!("CV artifact: {:?}", path),
        None => tracing::info!("CV artifact: embedded"),
    }

    if config.download_password == config::DEFAULT_DOWNLOAD_PASSWORD {
        tracing::warn!("Using the default download password (PORTFOLIO_DOWNLOAD_PASSWORD not set)");
    }

    let state = AppState::new(config.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
