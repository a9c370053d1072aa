//! Browser lifecycle management and process control.
//!
//! This module provides `TestBrowser`, which launches Chrome, drives the CDP
//! handler, and hands out pages. One browser serves a whole `waypoint run`;
//! each suite gets its own page.
//!
//! # Resource Safety
//!
//! `TestBrowser` implements Drop so the Chrome process is killed even if a
//! run aborts. Explicit cleanup via `close()` is preferred.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use crate::wait::DEFAULT_POLL_INTERVAL;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Configuration for launching a test browser.
#[derive(Debug, Clone)]
pub struct TestBrowserConfig {
    /// Run in headless mode (default: true unless the `visible` feature is on).
    pub headless: bool,

    /// Browser window size before any viewport override (default: 1920x1080).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<PathBuf>,

    /// How often pages re-check wait conditions.
    pub poll_interval: Duration,
}

impl TestBrowserConfig {
    /// Creates a new config with defaults for headless testing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables visible mode for debugging.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Uses a specific Chrome/Chromium executable.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Converts to chromiumoxide `BrowserConfig`.
    fn to_browser_config(&self) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        if self.headless {
            config = config.arg("--headless");
        } else {
            config = config.with_head();
        }

        config = config.arg(format!(
            "--window-size={},{}",
            self.window_size.0, self.window_size.1
        ));

        // A unique profile directory avoids ProcessSingleton conflicts between
        // concurrent runs on the same machine.
        let unique_id = uuid::Uuid::new_v4();
        let user_data_dir = std::env::temp_dir().join(format!("waypoint-{unique_id}"));
        config = config.arg(format!("--user-data-dir={}", user_data_dir.display()));

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path.clone());
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for TestBrowserConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: (1920, 1080),
            args: vec![
                // --no-sandbox is only acceptable because suites run in
                // disposable CI/Docker environments. Required when user
                // namespaces are unavailable.
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containerized environments
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// A managed browser instance.
///
/// # Example
///
/// ```ignore
/// let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
/// let page = browser.new_page().await?;
/// page.navigate("https://example.com").await?;
/// browser.close().await?;
/// ```
pub struct TestBrowser {
    inner: Arc<Mutex<Option<Browser>>>,
    poll_interval: Duration,
}

impl TestBrowser {
    /// Launches a new browser instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is not installed, not executable,
    /// or fails to start.
    pub async fn launch(config: TestBrowserConfig) -> Result<Self> {
        debug!("Launching browser with config: {:?}", config);

        let browser_config = config.to_browser_config()?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide only processes CDP events while the handler is polled
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {}", e);
                }
            }
        });

        debug!("Browser launched successfully");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
            poll_interval: config.poll_interval,
        })
    }

    /// Creates a new browser page (tab) on `about:blank`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` if the browser has been closed.
    pub async fn new_page(&self) -> Result<Page> {
        let browser = self.inner.lock().await;

        let browser = browser.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page, self.poll_interval))
    }

    /// Closes the browser and kills the Chrome process.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully.
    pub async fn close(self) -> Result<()> {
        let mut browser_guard = self.inner.lock().await;

        if let Some(mut browser) = browser_guard.take() {
            debug!("Closing browser gracefully");
            browser
                .close()
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
            // Reap the child so it does not linger as a zombie
            if let Err(e) = browser.wait().await {
                warn!("Failed to reap browser process: {e}");
            }
        }

        Ok(())
    }

    /// Returns true if the browser has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

impl Drop for TestBrowser {
    fn drop(&mut self) {
        // Drop cannot await, so chromiumoxide's Browser Drop kills the
        // process if close() was never called.
        if let Ok(guard) = self.inner.try_lock() {
            if guard.is_some() {
                warn!("TestBrowser dropped without explicit close() - forcing shutdown via Drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sandbox_free_and_headless() {
        let config = TestBrowserConfig::default();
        assert_eq!(config.headless, !cfg!(feature = "visible"));
        assert!(config.args.iter().any(|a| a == "--no-sandbox"));
        assert_eq!(config.window_size, (1920, 1080));
    }

    #[test]
    fn builder_methods_compose() {
        let config = TestBrowserConfig::new()
            .visible()
            .with_window_size(1600, 900)
            .with_chrome_path("/usr/bin/chromium")
            .with_args(vec!["--lang=en-US".to_string()]);

        assert!(!config.headless);
        assert_eq!(config.window_size, (1600, 900));
        assert_eq!(config.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
        assert!(config.args.iter().any(|a| a == "--lang=en-US"));
        assert!(config.args.iter().any(|a| a == "--disable-dev-shm-usage"));
    }

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn browser_launch_and_close() {
        let browser = TestBrowser::launch(TestBrowserConfig::default())
            .await
            .expect("failed to launch browser");

        assert!(!browser.is_closed().await);

        browser.close().await.expect("failed to close browser");
    }
}
