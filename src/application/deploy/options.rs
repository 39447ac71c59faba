//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::domain::value_objects::RemoteTarget;
use crate::infrastructure::remote::DEFAULT_BUILD_SCRIPT;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Local project directory (mirrored as its contents)
    pub source: PathBuf,
    /// Robot account, address and deploy directory
    pub target: RemoteTarget,
    /// Build entrypoint relative to the deployed directory
    pub build_script: String,
    /// Ask rsync for a dry run and skip the remote build
    pub dry_run: bool,
    /// Sync only
    pub skip_build: bool,
}

impl DeployOptions {
    pub fn new(source: impl Into<PathBuf>, target: RemoteTarget) -> Self {
        Self {
            source: source.into(),
            target,
            build_script: DEFAULT_BUILD_SCRIPT.to_string(),
            dry_run: false,
            skip_build: false,
        }
    }

    pub fn with_build_script(mut self, script: impl Into<String>) -> Self {
        self.build_script = script.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_skip_build(mut self, skip_build: bool) -> Self {
        self.skip_build = skip_build;
        self
    }

    /// Why the build step will not run even if the sync succeeds
    pub fn build_skip_reason(&self) -> Option<&'static str> {
        if self.dry_run {
            Some("dry run")
        } else if self.skip_build {
            Some("--skip-build")
        } else {
            None
        }
    }
}
