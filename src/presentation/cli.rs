//! CLI Argument Parsing
//!
//! Running with no arguments deploys with the configured defaults.
//! Every flag is an override.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// robodeploy - mirror the project onto the robot and build it there
#[derive(Parser, Debug)]
#[command(name = "robodeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote user (default: booster)
    #[arg(long)]
    pub user: Option<String>,

    /// Remote host name or IP address
    #[arg(long)]
    pub host: Option<String>,

    /// Deploy directory on the remote host
    #[arg(long, value_name = "PATH")]
    pub remote_path: Option<String>,

    /// Local directory to mirror (default: parent of the tool's directory)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Config file to read instead of robodeploy.toml / the user config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ask rsync for a dry run and skip the remote build
    #[arg(long)]
    pub dry_run: bool,

    /// Only synchronize, do not trigger the remote build
    #[arg(long)]
    pub skip_build: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows commands, -vv adds config details)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}
