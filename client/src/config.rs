//! Configuration management for the sync client.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote quote endpoint
    pub remote_url: String,
    /// Path of the local state file
    pub data_path: String,
    /// Interval between periodic sync cycles
    pub sync_interval: Duration,
    /// Whether to push the merged list back to the remote after each cycle
    pub push_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let remote_url = env::var("REMOTE_URL").map_err(|_| ConfigError::MissingRemoteUrl)?;

        let data_path = env::var("DATA_PATH").unwrap_or_else(|_| "quotesync.json".to_string());

        let sync_interval = env::var("SYNC_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidSyncInterval)?;

        let push_enabled = env::var("PUSH_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            remote_url,
            data_path,
            sync_interval,
            push_enabled,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REMOTE_URL environment variable is required")]
    MissingRemoteUrl,

    #[error("Invalid SYNC_INTERVAL_SECS value")]
    InvalidSyncInterval,
}
