//! Error types for robodeploy
//!
//! Library code returns `DeployError`; the binary wraps it in `anyhow`
//! at the command layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for robodeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Exit code used when the configuration cannot be loaded or is invalid
pub const EXIT_CONFIG: i32 = 2;

/// Exit code used when an external tool cannot be started (matches a shell)
pub const EXIT_NOT_FOUND: i32 = 127;

/// Main error type for robodeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The local source directory could not be derived from the anchor path
    #[error("cannot resolve source directory from {anchor}: {source}")]
    SourceResolution {
        anchor: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external tool could not be started at all
    #[error("failed to start '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A required configuration value is missing or empty
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for the expected schema
    #[error("invalid config file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit code this error maps to when it ends the run
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::InvalidConfig(_) | DeployError::ConfigParse { .. } => EXIT_CONFIG,
            DeployError::ToolSpawn { .. } => EXIT_NOT_FOUND,
            DeployError::SourceResolution { .. } | DeployError::Io(_) => 1,
        }
    }
}
