//! Waypoint CLI - viewport-cycling browser acceptance tests.
//!
//! This crate provides the `waypoint` command. It discovers suite files,
//! drives one headless browser through every suite, and reports per-assertion
//! results with a summary.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `run`, `check`, `list` and `init`
//! - [`settings`] - Run settings merged from file, environment and flags
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines, spinner, summaries and the terminal reporter
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result};
