//! Error types for geopin.

use thiserror::Error;

/// Main error type for geopin operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Durable slot storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::sqlite::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A geocoding or imagery collaborator failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
