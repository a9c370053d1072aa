use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available waypoint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run suites against a headless browser
    ///
    /// Discovers suite files under the given paths, launches one browser and
    /// runs every suite in turn. Exits non-zero if any assertion fails or a
    /// suite aborts.
    Run(RunArgs),

    /// Validate suite files without launching a browser
    Check(CheckArgs),

    /// List discovered suites
    List(ListArgs),

    /// Write a starter suite file
    Init(InitArgs),
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Suite files or directories to search
    ///
    /// Examples:
    ///   waypoint run suites/
    ///   waypoint run suites/bloomberg.toml suites/cbc.toml
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Directory capture files are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip all screenshots
    #[arg(long)]
    pub no_capture: bool,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Chrome/Chromium executable to launch
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,

    /// Override every suite's element and URL wait bound
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Print suite summaries as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Suite files or directories to validate
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Suite files or directories to search
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Directory to write the starter suite into
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing starter suite
    #[arg(long)]
    pub force: bool,
}
