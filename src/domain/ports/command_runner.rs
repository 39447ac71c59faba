//! Command Runner Port
//!
//! Abstracts running an external program to completion so the deploy
//! sequence can be exercised without spawning rsync or ssh.

use std::fmt;

use crate::error::DeployResult;

/// One external command: program plus argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as a copy-pasteable shell command line.
    pub fn render(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Quote `s` for a POSIX shell unless it is made only of safe characters.
pub fn shell_word(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Success,
    Failed { code: i32 },
}

impl ToolStatus {
    /// Build a status from a raw exit code (0 is success).
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            ToolStatus::Success
        } else {
            ToolStatus::Failed { code }
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ToolStatus::Success)
    }

    pub fn code(&self) -> i32 {
        match self {
            ToolStatus::Success => 0,
            ToolStatus::Failed { code } => *code,
        }
    }
}

/// Runs external programs to completion.
///
/// Implementations block until the child exits. Failing to start the
/// program at all is an error; a non-zero exit is a `ToolStatus`.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> DeployResult<ToolStatus>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> DeployResult<ToolStatus> {
        (**self).run(invocation)
    }
}
