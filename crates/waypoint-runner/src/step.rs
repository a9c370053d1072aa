//! One viewport cycle.
//!
//! The cycle is a single linear sequence: resize, reload, settle, assert the
//! title, then wait for the navigational element and follow it. Every
//! suspension is bounded by the settle delay or the page load timeout.
//!
//! Two assertions are recorded per cycle. The second one covers the element
//! and the navigation it triggers: it passes once the destination URL
//! matches, and fails on whichever wait expired first.

use crate::outcome::{CaptureArtifact, RunSummary, Stage, StepOutcome};
use crate::reporter::Reporter;
use std::path::Path;
use tracing::{debug, warn};
use waypoint_browser::{BrowserSession, Result};
use waypoint_config::{CaptureNamer, CaptureRegion, SettleStrategy, TestConfig, ViewportSpec};

pub const REASON_TITLE_MISMATCH: &str = "title-mismatch";
pub const REASON_ELEMENT_TIMEOUT: &str = "element-not-found-or-timeout";
pub const REASON_NAVIGATION_TIMEOUT: &str = "navigation-timeout";

/// Loads the target URL, bounded by the page load timeout.
///
/// A load that does not commit in time is logged and tolerated; the waits
/// that follow decide the outcome.
pub(crate) async fn open_target(session: &dyn BrowserSession, config: &TestConfig) -> Result<()> {
    match session
        .open(&config.target_url, config.page_load_timeout)
        .await
    {
        Ok(()) => Ok(()),
        Err(e) if e.is_timeout() => {
            warn!(url = %config.target_url, "target still loading, continuing: {e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// The per-viewport unit of a run.
pub struct NavigationStep<'a> {
    config: &'a TestConfig,
    viewport: &'a ViewportSpec,
    namer: &'a CaptureNamer,
    output_dir: &'a Path,
}

impl<'a> NavigationStep<'a> {
    pub fn new(
        config: &'a TestConfig,
        viewport: &'a ViewportSpec,
        namer: &'a CaptureNamer,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            config,
            viewport,
            namer,
            output_dir,
        }
    }

    /// Runs the cycle, recording both assertions into `summary`.
    ///
    /// # Errors
    ///
    /// Any browser error other than an element or URL wait timeout is a
    /// driver fault and is returned as is. Nothing further is recorded.
    pub async fn run(
        &self,
        session: &dyn BrowserSession,
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let viewport = self.viewport;

        debug!(%viewport, "resizing viewport");
        session.set_viewport(viewport.width, viewport.height).await?;

        debug!(%viewport, url = %self.config.target_url, "reloading target");
        open_target(session, self.config).await?;
        self.settle(session).await?;
        reporter.info(&format!("Current viewport: {viewport}"));

        let title = session.title().await?;
        let outcome = if self.config.title_pattern.is_match(&title) {
            StepOutcome::pass(Stage::Title)
        } else {
            debug!(%viewport, %title, "title does not match");
            StepOutcome::fail(Stage::Title, REASON_TITLE_MISMATCH)
        };
        self.record(&outcome, reporter, summary);

        let outcome = self.follow_element(session, reporter, summary).await?;
        self.record(&outcome, reporter, summary);

        Ok(())
    }

    async fn settle(&self, session: &dyn BrowserSession) -> Result<()> {
        match self.config.settle {
            SettleStrategy::Delay => {
                tokio::time::sleep(self.config.settle_delay).await;
            }
            SettleStrategy::DocumentReady => {
                match session.wait_until_ready(self.config.page_load_timeout).await {
                    Ok(()) => {}
                    Err(e) if e.is_timeout() => {
                        warn!(viewport = %self.viewport, "page never reported ready, continuing: {e}");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }

    async fn follow_element(
        &self,
        session: &dyn BrowserSession,
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> Result<StepOutcome> {
        let config = self.config;
        let viewport = self.viewport;

        match session
            .wait_for_selector(&config.nav_selector, config.page_load_timeout)
            .await
        {
            Ok(()) => {}
            Err(e) if e.is_timeout() => {
                debug!(%viewport, selector = %config.nav_selector, "element never appeared");
                return Ok(StepOutcome::fail(Stage::ElementFound, REASON_ELEMENT_TIMEOUT));
            }
            Err(e) => return Err(e),
        }

        reporter.info(&format!(
            "{viewport}: found navigational element '{}'",
            config.nav_selector
        ));
        self.capture(session, &config.home_stage, summary).await?;

        debug!(%viewport, "activating element");
        session.click(&config.nav_selector).await?;

        match session
            .wait_for_url(&config.destination_url_pattern, config.page_load_timeout)
            .await
        {
            Ok(()) => {}
            Err(e) if e.is_timeout() => {
                debug!(%viewport, "destination url never matched");
                return Ok(StepOutcome::fail(Stage::Navigation, REASON_NAVIGATION_TIMEOUT));
            }
            Err(e) => return Err(e),
        }

        self.capture(session, &config.destination_stage, summary)
            .await?;
        Ok(StepOutcome::pass(Stage::ElementFound))
    }

    async fn capture(
        &self,
        session: &dyn BrowserSession,
        stage: &str,
        summary: &mut RunSummary,
    ) -> Result<()> {
        if !self.config.capture_enabled {
            return Ok(());
        }

        let (width, height) = (self.viewport.width, self.viewport.height);
        let filename = self.namer.name_for(stage, width, height);
        let path = self.output_dir.join(&filename);
        let region = CaptureRegion::viewport(width, height);

        session.capture(&path, region).await?;
        debug!(path = %path.display(), "captured {stage}");

        summary.artifacts.push(CaptureArtifact {
            filename,
            path,
            region,
        });
        Ok(())
    }

    fn record(&self, outcome: &StepOutcome, reporter: &mut dyn Reporter, summary: &mut RunSummary) {
        let message = self.describe(outcome);
        match outcome {
            StepOutcome::Pass { .. } => reporter.pass(&message),
            StepOutcome::Fail { .. } => reporter.fail(&message),
        }
        summary.record(outcome);
    }

    fn describe(&self, outcome: &StepOutcome) -> String {
        let viewport = self.viewport;
        let config = self.config;
        match outcome {
            StepOutcome::Pass { stage: Stage::Title } => {
                format!("{viewport}: title matches /{}/", config.title_pattern)
            }
            StepOutcome::Pass { .. } => format!(
                "{viewport}: '{}' leads to /{}/",
                config.nav_selector, config.destination_url_pattern
            ),
            StepOutcome::Fail { stage, reason } => format!("{viewport}: {stage} {reason}"),
        }
    }
}
