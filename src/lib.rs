//! robodeploy - deploy a source tree to a robot and build it there
//!
//! Two sequential external commands: `rsync` mirrors the local project
//! onto the robot, then `ssh` runs the build entrypoint in the deployed
//! directory. The run stops at the first failure and exits with that
//! command's exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::{Config, Verbosity};
pub use domain::ports::{CommandRunner, DeployEvent, DeployEventSink, Invocation, ToolStatus};
pub use domain::value_objects::{ExcludePatterns, RemoteTarget};
pub use error::{DeployError, DeployResult};
