//! Page-level browser operations and navigation.
//!
//! This module provides the Page type, which represents a browser tab and
//! exposes navigation, emulation, waiting, activation and capture. It is the
//! production [`BrowserSession`].

use crate::error::{BrowserError, Result};
use crate::session::BrowserSession;
use crate::wait::{WaitConfig, wait_for_result, within};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetDeviceMetricsOverrideParams, SetUserAgentOverrideParams,
};
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, Viewport};
use chromiumoxide::page::{Page as ChromePage, ScreenshotParams};
use regex::Regex;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use waypoint_config::CaptureRegion;

/// Represents a browser page (tab) with testing capabilities.
///
/// This type wraps `chromiumoxide::page::Page` and adds:
/// - Bounded waits for load, selectors and URLs
/// - Viewport and user-agent emulation
/// - Region captures written straight to disk
#[derive(Debug)]
pub struct Page {
    inner: ChromePage,
    poll_interval: Duration,
}

impl Page {
    /// Wraps a chromiumoxide page. Called by `TestBrowser::new_page`.
    pub(crate) fn new(page: ChromePage, poll_interval: Duration) -> Self {
        Self {
            inner: page,
            poll_interval,
        }
    }

    fn wait_config(&self, timeout: Duration) -> WaitConfig {
        WaitConfig::new(timeout, self.poll_interval)
    }

    /// Navigates to an absolute URL, bounded by `timeout`.
    ///
    /// Readiness is not awaited; pair with [`Page::wait_for_load`] when the
    /// document must be complete.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if Chrome rejects the navigation, or
    /// `WaitTimeout` if it does not commit before `timeout`.
    pub async fn navigate(&self, url: &str, timeout: Duration) -> Result<()> {
        debug!("Navigating to {url}");
        within(timeout, &format!("navigation to {url}"), async {
            self.inner
                .goto(url)
                .await
                .map_err(|e| BrowserError::NavigationFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(())
        })
        .await
    }

    /// Waits for the page load to complete (`document.readyState`).
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the page is not ready in time.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    let ready = result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete");

                    Ok::<_, BrowserError>(ready)
                }
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page context and returns the result.
    ///
    /// # Security
    ///
    /// Do not pass unsanitized input; encode values with `serde_json` first.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be deserialized.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Waits for a CSS selector to appear in the DOM.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if no element matches before the deadline.
    pub async fn wait_for_selector(&self, selector: &str, config: WaitConfig) -> Result<()> {
        let script = selector_probe(selector)?;

        wait_for_result(
            || {
                let page = self.inner.clone();
                let script = script.clone();
                async move {
                    let result = page
                        .evaluate(script.as_str())
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok::<_, BrowserError>(result
                        .value()
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false))
                }
            },
            config,
            &format!("selector '{selector}'"),
        )
        .await
    }

    /// Waits for the page URL to match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the URL never matches before the deadline.
    pub async fn wait_for_url_match(&self, pattern: &Regex, config: WaitConfig) -> Result<()> {
        wait_for_result(
            move || async move {
                let href: String = self.evaluate("window.location.href").await?;
                Ok::<_, BrowserError>(pattern.is_match(&href))
            },
            config,
            &format!("url matching /{pattern}/"),
        )
        .await
    }

    /// Returns the current page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn current_url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// Returns the page title.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    /// Emulates a `width` x `height` viewport at device scale 1.
    ///
    /// # Errors
    ///
    /// Returns `EmulationFailed` if Chrome rejects the metrics.
    pub async fn set_viewport(&self, width: u32, height: u32) -> Result<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(width))
            .height(i64::from(height))
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(BrowserError::EmulationFailed)?;

        self.inner.execute(params).await?;
        Ok(())
    }

    /// Overrides the user agent string.
    ///
    /// # Errors
    ///
    /// Returns an error if the CDP command fails.
    pub async fn set_user_agent(&self, user_agent: &str) -> Result<()> {
        self.inner
            .execute(SetUserAgentOverrideParams::new(user_agent))
            .await?;
        Ok(())
    }

    /// Clicks the first element matching `selector`.
    ///
    /// The click is dispatched through the DOM, so elements that are present
    /// but not rendered (collapsed menus, zero-size links) still activate.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let element =
            self.inner
                .find_element(selector)
                .await
                .map_err(|e| BrowserError::ElementNotFound {
                    selector: selector.to_string(),
                    reason: e.to_string(),
                })?;

        element
            .call_js_fn(DOM_CLICK, false)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;
        Ok(())
    }

    /// Takes a PNG screenshot of `region`.
    ///
    /// # Errors
    ///
    /// Returns an error if screenshot capture fails.
    pub async fn screenshot(&self, region: CaptureRegion) -> Result<Vec<u8>> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .clip(Viewport {
                x: f64::from(region.left),
                y: f64::from(region.top),
                width: f64::from(region.width),
                height: f64::from(region.height),
                scale: 1.0,
            })
            .build();

        self.inner
            .screenshot(params)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Closes the page.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the page fails.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for Page {
    async fn set_user_agent(&self, user_agent: &str) -> Result<()> {
        Page::set_user_agent(self, user_agent).await
    }

    async fn open(&self, url: &str, timeout: Duration) -> Result<()> {
        self.navigate(url, timeout).await
    }

    async fn set_viewport(&self, width: u32, height: u32) -> Result<()> {
        Page::set_viewport(self, width, height).await
    }

    async fn wait_until_ready(&self, timeout: Duration) -> Result<()> {
        self.wait_for_load(self.wait_config(timeout)).await
    }

    async fn title(&self) -> Result<String> {
        Page::title(self).await
    }

    async fn url(&self) -> Result<String> {
        self.current_url().await
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        Page::wait_for_selector(self, selector, self.wait_config(timeout)).await
    }

    async fn wait_for_url(&self, pattern: &Regex, timeout: Duration) -> Result<()> {
        self.wait_for_url_match(pattern, self.wait_config(timeout))
            .await
    }

    async fn click(&self, selector: &str) -> Result<()> {
        Page::click(self, selector).await
    }

    async fn capture(&self, path: &Path, region: CaptureRegion) -> Result<()> {
        let capture_failed = |reason: String| BrowserError::CaptureFailed {
            path: path.to_path_buf(),
            reason,
        };

        let bytes = within(
            Duration::from_secs(30),
            "screenshot",
            self.screenshot(region),
        )
        .await
        .map_err(|e| capture_failed(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| capture_failed(e.to_string()))?;
        }
        let size = bytes.len();
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| capture_failed(e.to_string()))?;

        debug!("Captured {size} bytes to {}", path.display());
        Ok(())
    }
}

const DOM_CLICK: &str = "function() { this.click(); }";

/// Builds the JS expression that tests for `selector`.
///
/// JSON encoding gives safe string escaping, so quotes, backticks and
/// newlines in the selector cannot break out of the literal.
fn selector_probe(selector: &str) -> Result<String> {
    let escaped = serde_json::to_string(selector)
        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;
    Ok(format!("!!document.querySelector({escaped})"))
}
