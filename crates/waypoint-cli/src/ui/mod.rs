//! Terminal UI utilities for status lines and formatted output.
//!
//! Everything here writes to stderr so stdout stays free for `--json` and
//! `list` output.
//!
//! # Examples
//!
//! ```no_run
//! use waypoint_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Launching browser...");
//! spinner.finish("Browser ready");
//!
//! ui::success("All suites passed");
//! ui::error("2 assertions failed");
//! ```

mod format;
mod messages;
mod reporter;
mod spinner;

pub use format::{format_duration, print_run_summary, summary_line};
pub use messages::{error, info, success, warning};
pub use reporter::TerminalReporter;
pub use spinner::Spinner;

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support from `--no-color` and the environment.
///
/// Call early in `main`. Status lines use `if_supports_color`, which honours
/// the override set here.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}

/// Whether spinners should animate. CI logs get plain lines instead.
pub(crate) fn interactive() -> bool {
    !is_ci() && console::user_attended_stderr()
}
