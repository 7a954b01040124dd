//! Configuration for the pair manager.
//!
//! All configuration is loaded from environment variables (or a local
//! `.env` file) with sensible defaults.

use std::env;

/// Pair store endpoint used when `PAIRS_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:5000/api/pairs";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote pair store
    pub api_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("PAIRS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        // A trailing slash would produce double slashes in item URLs
        let api_url = api_url.trim_end_matches('/').to_string();

        let log_level = env::var("PAIRS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self { api_url, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the process environment is shared across test threads
    #[test]
    fn test_config_from_env() {
        env::remove_var("PAIRS_API_URL");
        env::remove_var("PAIRS_LOG_LEVEL");

        let config = Config::from_env();
        assert_eq!(config.api_url, "http://localhost:5000/api/pairs");
        assert_eq!(config.log_level, "info");

        env::set_var("PAIRS_API_URL", "http://pairs.local/api/pairs/");
        let config = Config::from_env();
        env::remove_var("PAIRS_API_URL");

        assert_eq!(config.api_url, "http://pairs.local/api/pairs");
    }
}
