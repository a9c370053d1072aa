//! Error types for suite loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("suite file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no suites found under {}", .0.display())]
    NoSuites(PathBuf),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid regular expression in '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("viewport '{name}' duplicates the {width}x{height} geometry of '{existing}'")]
    DuplicateViewport {
        name: String,
        existing: String,
        width: u32,
        height: u32,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }
}
