use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Subscription file missing or unreadable
    #[error("Cannot read '{}': {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Base64 decoding (after padding repair)
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text
    #[error("Decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/serialisation
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AppError {
    /// True for the decode class of failures (bad base64 or bad UTF-8)
    pub fn is_decode_error(&self) -> bool {
        matches!(self, AppError::Base64(_) | AppError::Utf8(_))
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    /// Parse errors carry a multi-line source snippet; fold it onto one line
    fn from(err: config::ConfigError) -> Self {
        let message = err
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        AppError::Config(message)
    }
}
