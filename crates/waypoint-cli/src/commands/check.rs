//! Check command implementation.
//!
//! Loads and validates every suite without launching a browser. Unlike `run`,
//! it keeps going after a bad file so all problems are reported at once.

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::ui;
use std::path::PathBuf;
use waypoint_config::{ConfigError, SuiteDiscovery, TestConfig};

/// Execute the check command.
///
/// # Errors
///
/// Returns `NoSuites` if nothing was found and `InvalidSuites` if any file
/// failed to load.
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking suites...");

    let mut files: Vec<PathBuf> = Vec::new();
    for root in &args.paths {
        let found = SuiteDiscovery::new(root).find()?;
        if found.is_empty() {
            ui::warning(&format!("No suites under {}", root.display()));
        }
        files.extend(found);
    }

    if files.is_empty() {
        let root = args.paths.first().cloned().unwrap_or_default();
        return Err(ConfigError::NoSuites(root).into());
    }

    let mut invalid = 0;
    for path in &files {
        match TestConfig::load(path) {
            Ok(config) => ui::success(&format!(
                "{} ({}): {} viewport(s), {} assertion(s)",
                config.script.id,
                path.display(),
                config.viewports.len(),
                config.expected_assertions()
            )),
            Err(e) => {
                invalid += 1;
                ui::error(&format!("{}: {e}", path.display()));
            }
        }
    }

    if invalid > 0 {
        return Err(CliError::InvalidSuites { count: invalid });
    }

    ui::success(&format!("{} suite(s) valid", files.len()));
    Ok(())
}
