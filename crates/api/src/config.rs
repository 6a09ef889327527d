//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
///
/// The Gemini advisor reads its own `GEMINI_*` variables; see
/// `gemini_advisor::GeminiConfig::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Nominatim base URL for hospital search.
    pub nominatim_url: String,
    /// User-Agent sent to Nominatim.
    pub nominatim_user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SEHAT_ADDR` | Server bind address | `127.0.0.1:8686` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:sehat.db?mode=rwc` |
    /// | `NOMINATIM_URL` | Nominatim base URL | `https://nominatim.openstreetmap.org` |
    /// | `NOMINATIM_USER_AGENT` | User-Agent for Nominatim | `sehat/0.1` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SEHAT_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8686".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:sehat.db?mode=rwc".to_string());

        let nominatim_url = env::var("NOMINATIM_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());

        let nominatim_user_agent =
            env::var("NOMINATIM_USER_AGENT").unwrap_or_else(|_| "sehat/0.1".to_string());

        Ok(Self {
            addr,
            database_url,
            nominatim_url,
            nominatim_user_agent,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SEHAT_ADDR format")]
    InvalidAddr,
}
