//! Sequencing of viewport cycles.

use crate::outcome::RunSummary;
use crate::reporter::Reporter;
use crate::step::NavigationStep;
use std::path::Path;
use tracing::debug;
use waypoint_browser::{BrowserSession, Result};
use waypoint_config::TestConfig;

/// Runs one [`NavigationStep`] per viewport, in listed order, one at a time.
pub struct ViewportCycleOrchestrator<'a> {
    config: &'a TestConfig,
    output_dir: &'a Path,
}

impl<'a> ViewportCycleOrchestrator<'a> {
    pub fn new(config: &'a TestConfig, output_dir: &'a Path) -> Self {
        Self { config, output_dir }
    }

    /// Cycles every viewport and returns the aggregated summary.
    ///
    /// On success `passed + failed == expected_assertions`.
    ///
    /// # Errors
    ///
    /// Stops at the first driver fault and returns it.
    pub async fn run(
        &self,
        session: &dyn BrowserSession,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        let namer = self.config.capture_namer();
        let mut summary = RunSummary::new(self.config.expected_assertions());
        let total = self.config.viewports.len();

        for (index, viewport) in self.config.viewports.iter().enumerate() {
            debug!("viewport {}/{total}: {viewport}", index + 1);
            NavigationStep::new(self.config, viewport, &namer, self.output_dir)
                .run(session, reporter, &mut summary)
                .await?;
        }

        debug_assert_eq!(summary.recorded(), summary.expected_assertions);
        Ok(summary)
    }
}
