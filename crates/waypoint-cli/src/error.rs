//! Error handling for the waypoint CLI.
//!
//! `CliError` wraps the library errors via `#[from]` and adds the failures
//! that only exist at the command level. `main` turns it into a miette report.

mod miette;

use std::path::PathBuf;
use thiserror::Error;
use waypoint_browser::BrowserError;
use waypoint_config::ConfigError;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Suite or settings loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The browser could not be launched or driven
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// `init` would overwrite an existing suite file
    #[error("Suite file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// One or more suite files failed validation
    #[error("{count} invalid suite file(s)")]
    InvalidSuites {
        /// Number of files that failed to load
        count: usize,
    },

    /// The run finished but not everything passed
    #[error("{failed} assertion(s) failed, {aborted} suite(s) aborted")]
    TestsFailed {
        /// Failed assertions across all suites
        failed: usize,
        /// Suites stopped by a driver fault
        aborted: usize,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
