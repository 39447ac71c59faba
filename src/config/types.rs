//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RemoteTarget;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::remote::{validate_build_script, DEFAULT_BUILD_SCRIPT};

use super::loader::{self, ConfigWarning};

/// Robot connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            path: default_path(),
        }
    }
}

fn default_user() -> String {
    "booster".to_string()
}

fn default_host() -> String {
    "192.168.57.45".to_string()
}

fn default_path() -> String {
    "/home/booster/Workspace/robocup_demo".to_string()
}

/// Remote build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
        }
    }
}

fn default_script() -> String {
    DEFAULT_BUILD_SCRIPT.to_string()
}

/// Verbosity level, ordered from least to most output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Apply `-v` count and `--quiet` on top of the configured level
    pub fn with_cli(self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Complete robodeploy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Local directory to mirror (overrides the location-derived default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// The validated remote target
    pub fn target(&self) -> DeployResult<RemoteTarget> {
        RemoteTarget::new(&self.remote.user, &self.remote.host, &self.remote.path)
    }

    /// The validated build script, relative to the remote path
    pub fn build_script(&self) -> DeployResult<&str> {
        validate_build_script(&self.build.script)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> DeployResult<String> {
        toml::to_string_pretty(self).map_err(|e| DeployError::InvalidConfig(e.to_string()))
    }
}
