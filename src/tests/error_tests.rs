//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::NiihauError;
use std::path::PathBuf;

/// Test that configuration errors convert and keep their message.
#[test]
fn test_config_error_conversion() {
    let error: NiihauError = ConfigError::FileNotFound(PathBuf::from("missing.toml")).into();
    let message = error.to_string();
    assert!(message.starts_with("Configuration error"));
    assert!(message.contains("missing.toml"));
    assert_eq!(error.component(), "config");
}

/// Test that nested IO errors work correctly.
#[test]
fn test_nested_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = NiihauError::from(io_error);

    assert!(error.to_string().contains("file not found"));
    assert_eq!(error.component(), "io");
}

/// Test the range error formatting.
#[test]
fn test_value_out_of_range_display() {
    let error = ConfigError::ValueOutOfRange {
        key: "index.default_limit".to_string(),
        message: "50 exceeds max_results (5)".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration value index.default_limit is out of valid range: 50 exceeds max_results (5)"
    );
}

/// Test custom errors pass their message through unchanged.
#[test]
fn test_custom_error() {
    let error = NiihauError::Custom("subscriber already set".to_string());
    assert_eq!(error.to_string(), "subscriber already set");
    assert_eq!(error.component(), "custom");
}
