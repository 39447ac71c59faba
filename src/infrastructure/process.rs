//! System process runner
//!
//! Spawns external tools with inherited stdin so password and host-key
//! prompts reach the operator, and waits for them to exit.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::ports::{CommandRunner, Invocation, ToolStatus};
use crate::error::{DeployError, DeployResult};

/// Where a child's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOutput {
    /// Share our stdout (normal console mode)
    #[default]
    Inherit,
    /// Send it to our stderr, keeping stdout free for NDJSON events
    Stderr,
}

/// `CommandRunner` backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    stdout: ChildOutput,
}

impl SystemRunner {
    pub fn new(stdout: ChildOutput) -> Self {
        Self { stdout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> DeployResult<ToolStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        match self.stdout {
            ChildOutput::Inherit => cmd.stdout(Stdio::inherit()),
            ChildOutput::Stderr => cmd.stdout(io::stderr()),
        };

        let status = cmd.status().map_err(|source| DeployError::ToolSpawn {
            program: invocation.program.clone(),
            source,
        })?;

        Ok(ToolStatus::from_code(exit_code(status)))
    }
}

/// Exit code of a finished child, shell-style.
///
/// A child killed by a signal reports `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
