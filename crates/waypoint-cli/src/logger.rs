//! Logging infrastructure for the waypoint CLI.
//!
//! Structured logging on the `tracing` ecosystem with verbosity flags,
//! `RUST_LOG` support and optional ANSI colors.
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting run");
//! debug!("Resizing viewport: {}", "desktop(1600,900)");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) const VERBOSE_FILTER: &str =
    "waypoint=debug,waypoint_cli=debug,waypoint_config=debug,waypoint_browser=debug,waypoint_runner=debug";
pub(crate) const QUIET_FILTER: &str = "error";
pub(crate) const DEFAULT_FILTER: &str =
    "waypoint=info,waypoint_cli=info,waypoint_config=info,waypoint_browser=info,waypoint_runner=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for waypoint crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: Custom filter
/// 4. Default: INFO for waypoint crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // stdout is reserved for --json and list output
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal's capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
