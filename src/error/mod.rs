//! Error module for the Niihau index.
//!
//! Index operations themselves are total; the errors here come from the
//! surrounding layers: configuration loading and validation, file I/O in the
//! command-line tool, and configuration serialization.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the crate.
pub type NiihauResult<T> = Result<T, NiihauError>;

/// Core error enum for the Niihau index.
#[derive(Error, Debug)]
pub enum NiihauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML serialization errors.
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl NiihauError {
    /// Name of the layer the error came from, used as a structured log field.
    pub fn component(&self) -> &'static str {
        match self {
            NiihauError::Config(_) => "config",
            NiihauError::Io(_) => "io",
            NiihauError::Serialization(_) | NiihauError::Toml(_) => "serialization",
            NiihauError::Custom(_) => "custom",
        }
    }
}
