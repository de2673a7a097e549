//! Error types for the Artist API
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ArtistError
pub type Result<T> = std::result::Result<T, ArtistError>;

/// Unified error type for Artist API operations
#[derive(Debug, Error)]
pub enum ArtistError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("An artist named '{0}' already exists")]
    DuplicateName(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Client Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid artist id: '{0}'")]
    InvalidId(String),

    #[error("Invalid search filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sled::Error> for ArtistError {
    fn from(err: sled::Error) -> Self {
        ArtistError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ArtistError {
    fn from(err: serde_json::Error) -> Self {
        ArtistError::Serialization(err.to_string())
    }
}
