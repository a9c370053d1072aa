//! Command implementations for the waypoint CLI.
//!
//! - [`run`] - Run suites against a headless browser
//! - [`check`] - Validate suite files
//! - [`list`] - Show discovered suites
//! - [`init`] - Write a starter suite
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod init;
pub mod list;
pub mod run;
mod templates;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use list::execute as list_execute;
pub use run::execute as run_execute;
