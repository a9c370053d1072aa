//! Waypoint CLI - viewport-cycling browser acceptance tests.
//!
//! This is the main entry point for the `waypoint` binary. It handles
//! command-line argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use waypoint_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Run(run_args) => commands::run_execute(run_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::List(list_args) => commands::list_execute(list_args).await,
        cli::Command::Init(init_args) => commands::init_execute(init_args).await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
