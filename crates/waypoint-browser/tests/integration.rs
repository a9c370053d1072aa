//! Integration tests for waypoint-browser
//!
//! These tests require Chrome/Chromium to be installed and are marked #[ignore]
//! by default. Run with: cargo test --package waypoint-browser -- --ignored

use regex::Regex;
use std::time::Duration;
use waypoint_browser::{BrowserError, BrowserSession, TestBrowser, TestBrowserConfig};
use waypoint_config::CaptureRegion;

/// A landing page whose link appears after `delay_ms` and points at `#stocks`.
fn landing_page(delay_ms: u64) -> String {
    format!(
        r#"
    <!DOCTYPE html>
    <html>
    <head><title>Markets Home</title></head>
    <body>
        <h1>Markets</h1>
        <script>
            setTimeout(() => {{
                const a = document.createElement('a');
                a.href = '#stocks';
                a.id = 'nav-stocks';
                a.textContent = 'Stocks';
                document.body.appendChild(a);
            }}, {delay_ms});
        </script>
    </body>
    </html>
    "#
    )
}

fn data_url(html: &str) -> String {
    format!("data:text/html,{}", urlencoding::encode(html))
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn test_open_and_read_title() {
    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.open(&data_url(&landing_page(0)), Duration::from_secs(10))
        .await
        .expect("failed to open");
    let title = BrowserSession::title(&page).await.expect("failed to read title");
    assert_eq!(title, "Markets Home");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn test_wait_for_late_selector() {
    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.open(&data_url(&landing_page(300)), Duration::from_secs(10))
        .await
        .expect("failed to open");
    BrowserSession::wait_for_selector(&page, "a[href$='stocks']", Duration::from_secs(5))
        .await
        .expect("selector should appear");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn test_selector_that_never_appears_times_out() {
    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.open(&data_url(&landing_page(0)), Duration::from_secs(10))
        .await
        .expect("failed to open");
    let result =
        BrowserSession::wait_for_selector(&page, "#does-not-exist", Duration::from_millis(500))
            .await;

    assert!(matches!(result, Err(BrowserError::WaitTimeout { .. })));

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn test_click_changes_url() {
    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.set_viewport(640, 480).await.expect("viewport override");
    page.open(&data_url(&landing_page(0)), Duration::from_secs(10))
        .await
        .expect("failed to open");
    BrowserSession::wait_for_selector(&page, "#nav-stocks", Duration::from_secs(5))
        .await
        .expect("link should exist");
    BrowserSession::click(&page, "#nav-stocks")
        .await
        .expect("click should succeed");

    let pattern = Regex::new("stocks$").unwrap();
    page.wait_for_url(&pattern, Duration::from_secs(5))
        .await
        .expect("url should change");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn test_click_activates_unrendered_link() {
    let html = r##"
    <!DOCTYPE html>
    <html>
    <head><title>Collapsed Menu</title></head>
    <body>
        <nav style="display: none"><a id="nav-stocks" href="#stocks">Stocks</a></nav>
    </body>
    </html>
    "##;

    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.set_viewport(360, 640).await.expect("viewport override");
    page.open(&data_url(html), Duration::from_secs(10))
        .await
        .expect("failed to open");
    BrowserSession::wait_for_selector(&page, "#nav-stocks", Duration::from_secs(5))
        .await
        .expect("link is in the DOM");
    BrowserSession::click(&page, "#nav-stocks")
        .await
        .expect("hidden link should still activate");

    let pattern = Regex::new("stocks$").unwrap();
    page.wait_for_url(&pattern, Duration::from_secs(5))
        .await
        .expect("url should change");

    browser.close().await.expect("failed to close");
}

#[tokio::test]
#[ignore]
async fn test_capture_writes_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("home-page-640-480.png");

    let browser = TestBrowser::launch(TestBrowserConfig::default())
        .await
        .expect("failed to launch");
    let page = browser.new_page().await.expect("failed to create page");

    page.set_viewport(640, 480).await.expect("viewport override");
    page.open(&data_url(&landing_page(0)), Duration::from_secs(10))
        .await
        .expect("failed to open");
    page.capture(&path, CaptureRegion::viewport(640, 480))
        .await
        .expect("capture should succeed");

    let bytes = std::fs::read(&path).expect("capture file exists");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    browser.close().await.expect("failed to close");
}
