//! Remote build over SSH
//!
//! Builds the ssh invocation that enters the deployed directory and runs
//! the build entrypoint there.

use crate::domain::ports::command_runner::shell_word;
use crate::domain::ports::Invocation;
use crate::domain::value_objects::RemoteTarget;
use crate::error::{DeployError, DeployResult};

/// Build entrypoint, relative to the deployed directory
pub const DEFAULT_BUILD_SCRIPT: &str = "scripts/build.sh";

/// Check that a build script names a file inside the deployed directory.
///
/// The script is always run as `./<script>` after `cd`, so empty and
/// absolute paths are rejected rather than rewritten.
pub fn validate_build_script(script: &str) -> DeployResult<&str> {
    let relative = script.trim().trim_start_matches("./");
    if relative.is_empty() {
        return Err(DeployError::InvalidConfig(
            "build script must not be empty".to_string(),
        ));
    }
    if relative.starts_with('/') || relative.starts_with('~') {
        return Err(DeployError::InvalidConfig(format!(
            "build script must be relative to the remote path, got '{}'",
            script
        )));
    }
    Ok(script)
}

/// The build step as an ssh invocation.
#[derive(Debug, Clone)]
pub struct SshBuild {
    target: RemoteTarget,
    script: String,
}

impl SshBuild {
    pub fn new(target: RemoteTarget) -> Self {
        Self {
            target,
            script: DEFAULT_BUILD_SCRIPT.to_string(),
        }
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Command string executed by the remote shell
    pub fn remote_command(&self) -> String {
        format!(
            "cd {} && ./{}",
            remote_dir(self.target.path()),
            shell_word(self.script.trim_start_matches("./"))
        )
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new("ssh")
            .arg(self.target.ssh_destination())
            .arg(self.remote_command())
    }
}

/// Quote a remote directory, leaving a leading `~` for the remote shell to expand.
fn remote_dir(path: &str) -> String {
    if path == "~" {
        return path.to_string();
    }
    match path.strip_prefix("~/") {
        Some(rest) if !rest.is_empty() => format!("~/{}", shell_word(rest)),
        Some(_) => "~/".to_string(),
        None => shell_word(path),
    }
}
