//! Init command implementation.
//!
//! Writes a starter suite file that passes `waypoint check` as is.

use crate::cli::InitArgs;
use crate::commands::templates::STARTER_SUITE;
use crate::error::{CliError, Result};
use crate::ui;
use std::fs;

/// File name of the starter suite.
pub const SUITE_FILE: &str = "waypoint.suite.toml";

/// Execute the init command.
///
/// # Errors
///
/// Returns `AlreadyExists` if the suite file exists and `--force` was not
/// given, or an I/O error if it cannot be written.
pub async fn execute(args: InitArgs) -> Result<()> {
    let path = args.dir.join(SUITE_FILE);
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::create_dir_all(&args.dir)?;
    fs::write(&path, STARTER_SUITE)?;

    ui::success(&format!("Created {}", path.display()));
    eprintln!("\nNext steps:");
    eprintln!("  1. Edit the target URL, selector and patterns");
    eprintln!("  2. waypoint check {}", path.display());
    eprintln!("  3. waypoint run {}", path.display());
    Ok(())
}
