//! # waypoint-browser
//!
//! Headless Chrome driver for waypoint navigation suites, built on
//! chromiumoxide.
//!
//! ## Architecture
//!
//! - **TestBrowser**: Manages the browser process lifecycle
//! - **Page**: One tab with navigation, emulation, waits, clicks and captures
//! - **BrowserSession**: The capability trait the runner drives; `Page`
//!   implements it, tests substitute scripted fakes
//! - **wait**: Bounded waits with left-closed, right-open deadlines
//!
//! ## Example Usage
//!
//! ```ignore
//! use waypoint_browser::{BrowserSession, TestBrowser, TestBrowserConfig};
//!
//! let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//!
//! page.set_viewport(360, 640).await?;
//! page.open("https://example.com", Duration::from_secs(10)).await?;
//! page.wait_for_selector("a[href$='docs']", Duration::from_secs(10)).await?;
//!
//! browser.close().await?;
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Unit tests**: wait deadlines, selector escaping, config builders
//! 2. **Integration tests**: Real browser tests (require Chrome installed)
//!
//! Run with `cargo test` (unit) or `cargo test -- --ignored` (integration).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod session;
pub mod wait;

// Re-export main types for convenience
pub use browser::{TestBrowser, TestBrowserConfig};
pub use error::{BrowserError, Result};
pub use page::Page;
pub use session::BrowserSession;
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitConfig};
