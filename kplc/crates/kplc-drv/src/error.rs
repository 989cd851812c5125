//! Error handling for the kplc driver.
//!
//! Lexical errors are diagnostics, not `Err` values; this enum only covers
//! failures that stop the driver itself.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the kplc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input or configuration file could not be read.
    #[error("cannot read `{}`", path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the token dump or diagnostics failed.
    #[error("failed to write output")]
    Write(#[from] std::io::Error),

    /// The configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A token could not be serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
