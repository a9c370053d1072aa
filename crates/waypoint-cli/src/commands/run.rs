//! Run command implementation.
//!
//! Launches one browser and runs every discovered suite in turn, each on a
//! fresh page.

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::{settings, ui};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use waypoint_browser::{TestBrowser, TestBrowserConfig};
use waypoint_config::{RunSettings, TestConfig, discover_suites};
use waypoint_runner::{Reporter, RunSummary, TestRunDriver};

/// Outcome of one suite within a run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub id: String,
    pub name: String,
    pub source: Option<PathBuf>,
    #[serde(flatten)]
    pub status: SuiteStatus,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SuiteStatus {
    /// Every viewport cycle ran; the summary may still contain failures.
    Completed { summary: RunSummary },
    /// A driver fault stopped the suite.
    Aborted { error: String },
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        matches!(&self.status, SuiteStatus::Completed { summary } if summary.is_success())
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.status, SuiteStatus::Aborted { .. })
    }

    pub fn failed_assertions(&self) -> usize {
        match &self.status {
            SuiteStatus::Completed { summary } => summary.failed,
            SuiteStatus::Aborted { .. } => 0,
        }
    }
}

/// Execute the run command.
///
/// # Process
///
/// 1. Resolve run settings (defaults, `waypoint.toml`, environment, flags)
/// 2. Discover and load suites
/// 3. Launch the browser
/// 4. Run each suite on its own page
/// 5. Print the summary (and JSON when requested)
///
/// # Errors
///
/// Returns `TestsFailed` when any assertion failed or any suite aborted, and
/// configuration or launch errors before any suite runs.
pub async fn execute(args: RunArgs) -> Result<()> {
    let started = Instant::now();
    let cwd = std::env::current_dir()?;
    let settings = settings::resolve(&cwd, &args)?;

    let suites: Vec<TestConfig> = discover_suites(&args.paths)?
        .into_iter()
        .map(|config| settings::apply(&settings, config))
        .collect();
    ui::info(&format!("Found {} suite(s)", suites.len()));

    let browser = launch(&settings).await?;
    let driver = TestRunDriver::new(settings.output_dir.clone());

    let mut reports = Vec::with_capacity(suites.len());
    for config in &suites {
        reports.push(run_suite(&browser, &driver, config).await);
    }

    if let Err(e) = browser.close().await {
        warn!("Failed to close browser: {e}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    ui::print_run_summary(&reports, started.elapsed());

    let failed: usize = reports.iter().map(SuiteReport::failed_assertions).sum();
    let aborted = reports.iter().filter(|r| r.is_aborted()).count();
    if failed > 0 || aborted > 0 {
        return Err(CliError::TestsFailed { failed, aborted });
    }

    ui::success("All suites passed");
    Ok(())
}

async fn launch(settings: &RunSettings) -> Result<TestBrowser> {
    let (width, height) = settings.window_size;
    let mut config = TestBrowserConfig::new().with_window_size(width, height);
    if !settings.headless {
        config = config.visible();
    }
    if let Some(path) = &settings.chrome_path {
        config = config.with_chrome_path(path.clone());
    }

    let spinner = ui::Spinner::new("Launching browser...");
    match TestBrowser::launch(config).await {
        Ok(browser) => {
            spinner.finish("Browser ready");
            Ok(browser)
        }
        Err(e) => {
            spinner.fail("Browser failed to launch");
            Err(e.into())
        }
    }
}

async fn run_suite(browser: &TestBrowser, driver: &TestRunDriver, config: &TestConfig) -> SuiteReport {
    let started = Instant::now();
    let script = &config.script;
    ui::info(&format!(
        "{} ({} viewport(s))",
        script.name,
        config.viewports.len()
    ));

    let mut reporter = ui::TerminalReporter::new(script.id.clone());
    let status = match execute_suite(browser, driver, config, &mut reporter).await {
        Ok(summary) => SuiteStatus::Completed { summary },
        Err(e) => {
            ui::error(&format!("{} aborted: {e}", script.id));
            SuiteStatus::Aborted {
                error: e.to_string(),
            }
        }
    };

    SuiteReport {
        id: script.id.clone(),
        name: script.name.clone(),
        source: config.source.clone(),
        status,
        duration_ms: millis(started.elapsed()),
    }
}

async fn execute_suite(
    browser: &TestBrowser,
    driver: &TestRunDriver,
    config: &TestConfig,
    reporter: &mut dyn Reporter,
) -> waypoint_browser::Result<RunSummary> {
    let page = browser.new_page().await?;
    let result = driver.execute(config, &page, reporter).await;

    if let Err(e) = page.close().await {
        warn!(suite = %config.script.id, "Failed to close page: {e}");
    }
    debug!(suite = %config.script.id, ok = result.is_ok(), "page released");
    result
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
