//! Custom error types for the AirCon bridge.
//!
//! This module provides fine-grained error handling for HTTP transport,
//! status payload parsing, and configuration validation.

use thiserror::Error;

/// Main error type for AirCon bridge operations.
#[derive(Error, Debug)]
pub enum AirconError {
    /// HTTP transport failure (connect, timeout, read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The AirCon service answered with a non-200 status.
    #[error("AirCon service returned HTTP {status} for {url}")]
    BadStatus { url: String, status: u16 },

    /// Status response body was not the expected JSON shape.
    #[error("Malformed status payload: {0}")]
    MalformedStatus(#[from] serde_json::Error),

    /// Status response carried an empty `devices` array.
    #[error("No devices found in the response")]
    NoDevices,

    /// Settings file or settings value problem.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, AirconError>;
