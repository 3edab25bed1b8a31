//! Error types for calcdemo-core.
//!
//! The domain types never fail: they return degraded values instead.
//! Errors only arise while loading a scenario or serializing a report.

use std::path::PathBuf;

/// The main error type for calcdemo-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration content.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for calcdemo-core operations.
pub type Result<T> = std::result::Result<T, Error>;
