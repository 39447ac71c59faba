//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console progress, JSON event streams, and test recording.

use std::fmt;
use std::path::PathBuf;

/// The two stages of a deployment, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Sync,
    Build,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::Sync => "sync",
            DeployStep::Build => "build",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        source: PathBuf,
        destination: String,
        dry_run: bool,
    },

    /// An external command is about to run
    StepStarted { step: DeployStep, command: String },

    /// An external command exited (0 on success)
    StepFinished { step: DeployStep, exit_code: i32 },

    /// A step was not run
    StepSkipped { step: DeployStep, reason: String },

    /// Deploy completed (successfully or not)
    Completed { exit_code: i32 },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
