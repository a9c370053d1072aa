//! The browser capability a navigation run needs.
//!
//! `BrowserSession` is what the runner drives. [`crate::Page`] implements it
//! on top of headless Chrome; tests implement it with scripted fakes. Waits
//! take their bound explicitly and report expiry as
//! [`BrowserError::WaitTimeout`](crate::BrowserError::WaitTimeout); any other
//! error is a driver fault.

use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::time::Duration;
use waypoint_config::CaptureRegion;

/// One exclusively owned browser tab.
///
/// The trait is object-safe so runners can hold `&dyn BrowserSession`.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Overrides the user agent for every subsequent request.
    async fn set_user_agent(&self, user_agent: &str) -> Result<()>;

    /// Navigates to an absolute URL, bounded by `timeout`.
    ///
    /// Resolves once the navigation is committed. Document readiness is not
    /// awaited here; see [`BrowserSession::wait_until_ready`].
    async fn open(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Resizes the emulated viewport.
    async fn set_viewport(&self, width: u32, height: u32) -> Result<()>;

    /// Resolves once `document.readyState` is `complete`.
    async fn wait_until_ready(&self, timeout: Duration) -> Result<()>;

    /// Current document title.
    async fn title(&self) -> Result<String>;

    /// Current page URL.
    async fn url(&self) -> Result<String>;

    /// Resolves once an element matching `selector` is in the DOM.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Resolves once the page URL matches `pattern`.
    async fn wait_for_url(&self, pattern: &Regex, timeout: Duration) -> Result<()>;

    /// Clicks the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Writes a PNG of `region` to `path`, creating parent directories.
    async fn capture(&self, path: &Path, region: CaptureRegion) -> Result<()>;
}
