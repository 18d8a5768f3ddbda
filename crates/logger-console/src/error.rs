//! Error types for the console transport

use std::io;

/// Result type for console transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or writing to the console
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options were rejected during construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An output sink failed to write or flush
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON configuration text could not be parsed
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration text could not be parsed
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
