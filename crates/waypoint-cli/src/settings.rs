//! Run settings with command-line overrides.
//!
//! Priority: CLI flags > `WAYPOINT_*` environment variables > `waypoint.toml`
//! > defaults. Flags that were not given leave lower layers untouched.

use crate::cli::RunArgs;
use crate::error::Result;
use figment::providers::Serialized;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use waypoint_config::{RunSettings, TestConfig};

/// The subset of [`RunSettings`] a `run` invocation can override.
#[derive(Debug, Default, Serialize)]
struct RunOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chrome_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_load_timeout_ms: Option<u64>,
}

impl From<&RunArgs> for RunOverrides {
    fn from(args: &RunArgs) -> Self {
        Self {
            output_dir: args.output_dir.clone(),
            capture: args.no_capture.then_some(false),
            headless: args.headed.then_some(false),
            chrome_path: args.chrome.clone(),
            page_load_timeout_ms: args.timeout_ms,
        }
    }
}

/// Resolve the settings for a run started in `dir`.
///
/// # Errors
///
/// Returns a configuration error if `waypoint.toml` or the environment holds
/// invalid values.
pub fn resolve(dir: impl AsRef<Path>, args: &RunArgs) -> Result<RunSettings> {
    let figment = RunSettings::figment(dir).merge(Serialized::defaults(RunOverrides::from(args)));
    Ok(RunSettings::extract(figment)?)
}

/// Apply run-wide overrides to one suite.
pub fn apply(settings: &RunSettings, mut config: TestConfig) -> TestConfig {
    if let Some(enabled) = settings.capture {
        config = config.with_capture(enabled);
    }
    if let Some(ms) = settings.page_load_timeout_ms {
        config = config.with_page_load_timeout(Duration::from_millis(ms));
    }
    config
}
