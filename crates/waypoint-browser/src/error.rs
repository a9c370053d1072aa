//! Error types for browser session operations.
//!
//! Every variant except [`BrowserError::WaitTimeout`] is a driver-level
//! fault: the browser crashed, a navigation failed, or a capture could not be
//! written. Wait timeouts are expected outcomes that callers usually turn
//! into failed assertions.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The main error type for all browser session operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch the browser process.
    ///
    /// This typically occurs when Chrome/Chromium is not installed,
    /// or when there are permission issues with the executable.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish or use the Chrome DevTools Protocol connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed or never finished loading.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// JavaScript execution in the page context failed.
    #[error("JavaScript execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// No element matched a selector that was about to be activated.
    #[error("no element matches '{selector}': {reason}")]
    ElementNotFound {
        /// The selector that matched nothing
        selector: String,
        /// Driver-reported reason
        reason: String,
    },

    /// A screenshot could not be taken or written.
    #[error("capture to '{}' failed: {reason}", path.display())]
    CaptureFailed {
        /// Destination of the capture
        path: PathBuf,
        /// Reason for the failure
        reason: String,
    },

    /// Emulation settings (viewport, user agent) were rejected.
    #[error("emulation override rejected: {0}")]
    EmulationFailed(String),

    /// An operation was attempted on a closed browser instance.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Generic I/O errors (file access, network, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrowserError {
    /// Returns true for a bounded wait that expired.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, BrowserError::WaitTimeout { .. })
    }
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wait_timeouts_are_timeouts() {
        let timeout = BrowserError::WaitTimeout {
            condition: "selector 'a'".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert!(timeout.is_timeout());
        assert!(!BrowserError::AlreadyClosed.is_timeout());
        assert!(!BrowserError::ConnectionFailed("gone".to_string()).is_timeout());
    }

    #[test]
    fn timeout_message_names_condition() {
        let err = BrowserError::WaitTimeout {
            condition: "selector 'a[href$=\\'stocks\\']'".to_string(),
            timeout: Duration::from_millis(10_000),
        };
        let message = err.to_string();
        assert!(message.contains("selector"));
        assert!(message.contains("10s"));
    }
}
