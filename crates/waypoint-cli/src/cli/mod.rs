//! Command-line interface definition for waypoint.
//!
//! # Command Structure
//!
//! - `waypoint run` - Run suites against a headless browser
//! - `waypoint check` - Validate suite files without a browser
//! - `waypoint list` - Show discovered suites
//! - `waypoint init` - Write a starter suite file

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ListArgs, RunArgs};

/// Waypoint - viewport-cycling browser acceptance tests
#[derive(Parser, Debug)]
#[command(
    name = "waypoint",
    version,
    about = "Viewport-cycling browser acceptance tests",
    long_about = "Waypoint loads a page at each configured viewport, checks its title,\n\
                  waits for a navigational element, follows it, and verifies the\n\
                  destination URL, capturing screenshots along the way."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows each viewport step: resize, reload, waits, clicks and captures.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
