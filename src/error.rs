// src/error.rs

//! Unified error handling for the lookup application.

use std::fmt;

use thiserror::Error;

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single chunk could not be fetched or decoded
    #[error("Chunk {index:03} failed: {message}")]
    Chunk { index: usize, message: String },

    /// Dataset was queried before a successful load
    #[error("Dataset is not loaded: {0}")]
    NotReady(String),

    /// Dataset initialization was attempted twice
    #[error("Dataset is already initialized")]
    AlreadyInitialized,
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a chunk error for the given index.
    pub fn chunk(index: usize, message: impl fmt::Display) -> Self {
        Self::Chunk {
            index,
            message: message.to_string(),
        }
    }

    /// Create a not-ready error.
    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::NotReady(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_error_pads_index() {
        let err = AppError::chunk(7, "status 404");
        assert_eq!(err.to_string(), "Chunk 007 failed: status 404");
    }
}
