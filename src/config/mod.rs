//! Configuration module for the portfolio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default secret phrase gating the CV download.
///
/// A deployment should override this via `PORTFOLIO_DOWNLOAD_PASSWORD`; the
/// default only exists so a fresh checkout behaves like the published site.
pub const DEFAULT_DOWNLOAD_PASSWORD: &str = "0224F699D5#";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret phrase required by the download endpoint
    pub download_password: String,
    /// Path to the CV artifact; `None` uses the build-time embedded copy
    pub cv_path: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let download_password = env::var("PORTFOLIO_DOWNLOAD_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_DOWNLOAD_PASSWORD.to_string());

        let cv_path = env::var("PORTFOLIO_CV_PATH").ok().map(PathBuf::from);

        let bind_addr = env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid PORTFOLIO_BIND_ADDR format");

        let log_level = env::var("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            download_password,
            cv_path,
            bind_addr,
            log_level,
        }
    }
}
