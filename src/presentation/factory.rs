//! Use Case Factory
//!
//! Creates the deploy use case with its infrastructure wired up and turns
//! CLI flags plus configuration into `DeployOptions`.

use std::io;
use std::path::PathBuf;

use crate::application::{DeployOptions, DeployUseCase};
use crate::config::Config;
use crate::domain::services::{canonical_source_dir, resolve_source_root};
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::{ChildOutput, SystemRunner};

use super::cli::Cli;

/// Type alias for the concrete DeployUseCase
pub type ConcreteDeployUseCase = DeployUseCase<SystemRunner>;

/// Create a deploy use case backed by real processes.
///
/// In JSON mode child stdout is redirected to stderr so stdout carries
/// only NDJSON events.
pub fn create_deploy_use_case(json: bool) -> ConcreteDeployUseCase {
    let stdout = if json {
        ChildOutput::Stderr
    } else {
        ChildOutput::Inherit
    };
    DeployUseCase::new(SystemRunner::new(stdout))
}

/// Flags beat configuration and environment.
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(user) = &cli.user {
        config.remote.user = user.clone();
    }
    if let Some(host) = &cli.host {
        config.remote.host = host.clone();
    }
    if let Some(path) = &cli.remote_path {
        config.remote.path = path.clone();
    }
    if let Some(source) = &cli.source {
        config.source = Some(source.clone());
    }
    config.output.verbosity = config.output.verbosity.with_cli(cli.verbose, cli.quiet);
    config
}

/// Local directory to mirror.
///
/// An explicit source (flag or config) is used as given; otherwise the
/// project is derived from `anchor`, the tool's own location. A failed
/// anchor lookup only matters when no explicit source is set.
pub fn resolve_source(config: &Config, anchor: io::Result<PathBuf>) -> DeployResult<PathBuf> {
    match (&config.source, anchor) {
        (Some(dir), _) => canonical_source_dir(dir),
        (None, Ok(exe)) => resolve_source_root(&exe),
        (None, Err(source)) => Err(DeployError::SourceResolution {
            anchor: PathBuf::from("<current executable>"),
            source,
        }),
    }
}

/// Build the options for one deploy run.
pub fn resolve_deploy_options(
    config: &Config,
    cli: &Cli,
    anchor: io::Result<PathBuf>,
) -> DeployResult<DeployOptions> {
    let target = config.target()?;
    let script = config.build_script()?;
    let source = resolve_source(config, anchor)?;

    Ok(DeployOptions::new(source, target)
        .with_build_script(script)
        .with_dry_run(cli.dry_run)
        .with_skip_build(cli.skip_build))
}
