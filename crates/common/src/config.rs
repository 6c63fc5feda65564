//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default "from" address for outgoing email when no sending profile
    /// supplies one
    pub default_from: String,

    /// Upper bound, in seconds, for an SMTP connection test
    pub probe_timeout_secs: u64,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            default_from: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@vendora.app".to_string()),

            probe_timeout_secs: env::var("SMTP_PROBE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "vendora=debug".to_string()),
        };

        Ok(config)
    }
}
