//! Scripted browser session for runner tests.
//!
//! Waits are driven through `waypoint_browser::wait::within`, so with a
//! paused tokio clock they resolve exactly at the scheduled instants.

#![allow(dead_code)]

use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use waypoint_browser::wait::within;
use waypoint_browser::{BrowserError, BrowserSession, Result};
use waypoint_config::{CaptureRegion, TestConfig};

/// When a waited-for condition becomes true, relative to the wait starting.
#[derive(Debug, Clone, Copy)]
pub enum Appears {
    After(Duration),
    Never,
}

impl Appears {
    pub fn now() -> Self {
        Appears::After(Duration::ZERO)
    }

    async fn arrive(self) -> Result<()> {
        match self {
            Appears::After(delay) => {
                sleep(delay).await;
                Ok(())
            }
            Appears::Never => std::future::pending().await,
        }
    }
}

/// A session whose page behaves as scripted. Every call is logged.
pub struct ScriptedSession {
    title: String,
    load: Appears,
    ready: Appears,
    element: Appears,
    destination: Appears,
    element_by_width: HashMap<u32, Appears>,
    fault_on: Option<&'static str>,
    started: Instant,
    title_reads: Mutex<Vec<Duration>>,
    viewport: Mutex<(u32, u32)>,
    log: Mutex<Vec<String>>,
    captures: Mutex<Vec<(PathBuf, CaptureRegion)>>,
}

impl ScriptedSession {
    /// A page titled `title` whose element and destination appear at once.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            load: Appears::now(),
            ready: Appears::now(),
            element: Appears::now(),
            destination: Appears::now(),
            element_by_width: HashMap::new(),
            fault_on: None,
            started: Instant::now(),
            title_reads: Mutex::new(Vec::new()),
            viewport: Mutex::new((0, 0)),
            log: Mutex::new(Vec::new()),
            captures: Mutex::new(Vec::new()),
        }
    }

    /// When `open` commits.
    pub fn load(mut self, appears: Appears) -> Self {
        self.load = appears;
        self
    }

    /// When `document.readyState` becomes `complete`.
    pub fn ready(mut self, appears: Appears) -> Self {
        self.ready = appears;
        self
    }

    pub fn element(mut self, appears: Appears) -> Self {
        self.element = appears;
        self
    }

    pub fn element_at_width(mut self, width: u32, appears: Appears) -> Self {
        self.element_by_width.insert(width, appears);
        self
    }

    pub fn destination(mut self, appears: Appears) -> Self {
        self.destination = appears;
        self
    }

    /// Makes the named operation fail with a connection error.
    pub fn fault_on(mut self, operation: &'static str) -> Self {
        self.fault_on = Some(operation);
        self
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Elapsed time at each title read, measured from construction.
    pub fn title_reads(&self) -> Vec<Duration> {
        self.title_reads.lock().unwrap().clone()
    }

    pub fn captures(&self) -> Vec<(PathBuf, CaptureRegion)> {
        self.captures.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str, detail: String) -> Result<()> {
        let (w, h) = *self.viewport.lock().unwrap();
        self.log
            .lock()
            .unwrap()
            .push(format!("{operation} {w}x{h} {detail}"));
        if self.fault_on == Some(operation) {
            return Err(BrowserError::ConnectionFailed(format!("{operation} crashed")));
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for ScriptedSession {
    async fn set_user_agent(&self, user_agent: &str) -> Result<()> {
        self.enter("user-agent", user_agent.to_string())
    }

    async fn open(&self, url: &str, timeout: Duration) -> Result<()> {
        self.enter("open", url.to_string())?;
        within(timeout, url, self.load.arrive()).await
    }

    async fn set_viewport(&self, width: u32, height: u32) -> Result<()> {
        *self.viewport.lock().unwrap() = (width, height);
        self.enter("viewport", String::new())
    }

    async fn wait_until_ready(&self, timeout: Duration) -> Result<()> {
        self.enter("ready", String::new())?;
        within(timeout, "document ready", self.ready.arrive()).await
    }

    async fn title(&self) -> Result<String> {
        self.enter("title", String::new())?;
        self.title_reads.lock().unwrap().push(self.started.elapsed());
        Ok(self.title.clone())
    }

    async fn url(&self) -> Result<String> {
        self.enter("url", String::new())?;
        Ok("https://example.test/".to_string())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.enter("wait-selector", selector.to_string())?;
        let width = self.viewport.lock().unwrap().0;
        let appears = self
            .element_by_width
            .get(&width)
            .copied()
            .unwrap_or(self.element);
        within(timeout, selector, appears.arrive()).await
    }

    async fn wait_for_url(&self, pattern: &Regex, timeout: Duration) -> Result<()> {
        self.enter("wait-url", pattern.to_string())?;
        within(timeout, pattern.as_str(), self.destination.arrive()).await
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.enter("click", selector.to_string())
    }

    async fn capture(&self, path: &Path, region: CaptureRegion) -> Result<()> {
        self.enter("capture", path.display().to_string())?;
        self.captures
            .lock()
            .unwrap()
            .push((path.to_path_buf(), region));
        Ok(())
    }
}

/// A Bloomberg-style suite over the given `(name, width, height)` viewports.
pub fn suite(viewports: &[(&str, u32, u32)]) -> TestConfig {
    let mut text = String::from(
        r#"
[manifest]
id = "bloomberg-home-page"
name = "Bloomberg Home Page Test"
description = "Tests navigation from the home page to the stocks page"

[target]
url = "https://www.bloomberg.com"
nav_selector = "a[href$='stocks']"
title_pattern = "Bloomberg"
destination_url_pattern = "www.bloomberg.com/markets/stocks"
destination_stage = "stocks-page"
"#,
    );
    for (name, width, height) in viewports {
        text.push_str(&format!(
            "\n[[viewports]]\nname = \"{name}\"\nwidth = {width}\nheight = {height}\n"
        ));
    }
    TestConfig::from_toml_str(&text).expect("fixture suite is valid")
}
