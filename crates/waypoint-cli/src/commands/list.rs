//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use waypoint_config::{TestConfig, discover_suites};

/// Execute the list command, printing one entry per suite to stdout.
///
/// # Errors
///
/// Returns configuration errors from discovery or loading.
pub async fn execute(args: ListArgs) -> Result<()> {
    let suites = discover_suites(&args.paths)?;
    for config in &suites {
        println!("{}", describe(config));
    }
    Ok(())
}

fn describe(config: &TestConfig) -> String {
    let script = &config.script;
    format!(
        "{}  {}  ({} viewport(s))\n    {}",
        script.id,
        script.name,
        config.viewports.len(),
        script.description
    )
}
