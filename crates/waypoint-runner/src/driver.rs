//! Entry point for running one suite against one browser session.

use crate::orchestrator::ViewportCycleOrchestrator;
use crate::outcome::RunSummary;
use crate::reporter::Reporter;
use crate::step::open_target;
use std::path::{Path, PathBuf};
use tracing::info;
use waypoint_browser::{BrowserSession, Result};
use waypoint_config::TestConfig;

/// Prepares the session, runs every viewport cycle, and signals completion.
#[derive(Debug, Clone)]
pub struct TestRunDriver {
    output_dir: PathBuf,
}

impl TestRunDriver {
    /// Captures are written under `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Sets the user agent, loads the target once, cycles the viewports and
    /// calls `reporter.done` exactly once.
    ///
    /// # Errors
    ///
    /// Driver faults propagate unchanged and `done` is not called.
    pub async fn execute(
        &self,
        config: &TestConfig,
        session: &dyn BrowserSession,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        info!(
            suite = %config.script.id,
            viewports = config.viewports.len(),
            "starting suite"
        );

        session.set_user_agent(&config.user_agent).await?;
        open_target(session, config).await?;

        let summary = ViewportCycleOrchestrator::new(config, &self.output_dir)
            .run(session, reporter)
            .await?;

        reporter.done(&summary);
        info!(
            suite = %config.script.id,
            passed = summary.passed,
            failed = summary.failed,
            "suite finished"
        );
        Ok(summary)
    }
}
