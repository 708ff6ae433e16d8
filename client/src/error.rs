//! Unified error handling for the sync client.

use thiserror::Error;

/// Application error type.
///
/// Transport failures and decode failures are distinct variants so callers
/// can tell "the network was down" apart from "the endpoint answered
/// garbage".
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("engine error: {0}")]
    Engine(#[from] quotesync_engine::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed remote payload: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
