//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use waypoint_browser::BrowserError;
use waypoint_config::ConfigError;

/// Convert `CliError` to a miette `Report`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Browser(e) => browser_error_to_miette(e),
        CliError::AlreadyExists(path) => miette::miette!(
            help = "Pass --force to overwrite it",
            "Suite file already exists: {}",
            path.display()
        ),
        CliError::InvalidSuites { count } => miette::miette!(
            help = "Fix the errors listed above and run `waypoint check` again",
            "{count} invalid suite file(s)"
        ),
        CliError::TestsFailed { .. } => miette::miette!(
            help = "Captures for passing stages are in the output directory",
            "{err}"
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NoSuites(path) => miette::miette!(
            help = "Suite files are .toml files with a [manifest] table; `waypoint init` writes one",
            "No suites found under {}",
            path.display()
        ),
        ConfigError::InvalidPattern { field, source } => miette::miette!(
            help = "Patterns use Rust regex syntax",
            "Invalid regular expression in '{field}': {source}"
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}

fn browser_error_to_miette(err: BrowserError) -> Report {
    match err {
        BrowserError::LaunchFailed { .. } => miette::miette!(
            help = "Install Chrome or Chromium, or point --chrome at the executable",
            "{err}"
        ),
        other => miette::miette!("Browser error: {}", other),
    }
}
