use clap::Parser;
use std::path::PathBuf;

use dep_mgmt::application::dto::OutputFormat;

/// Apply BOM-based dependency management to the scopes of a build
#[derive(Parser, Debug)]
#[command(name = "dep-mgmt")]
#[command(version)]
#[command(
    about = "Resolve managed dependency versions and exclusions for every scope of a build",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Build description file (defaults to <path>/dep-mgmt.config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root of the local BOM repository (defaults to <path>/boms)
    #[arg(short, long)]
    pub repository: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print resolution diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
