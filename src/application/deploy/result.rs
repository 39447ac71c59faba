//! Deploy Result
//!
//! Outcome of a deploy run.

use crate::domain::ports::ToolStatus;

/// What each step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Exit status of the sync tool (the sync always runs)
    pub sync: ToolStatus,
    /// Exit status of the remote session, `None` when it was not started
    pub build: Option<ToolStatus>,
}

impl DeployOutcome {
    /// Both steps that were meant to run succeeded
    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }

    /// Overall exit code: the first failing command's code, 0 otherwise
    pub fn exit_code(&self) -> i32 {
        if !self.sync.success() {
            return self.sync.code();
        }
        self.build.map(|b| b.code()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_failure_wins() {
        let outcome = DeployOutcome {
            sync: ToolStatus::Failed { code: 12 },
            build: None,
        };
        assert_eq!(outcome.exit_code(), 12);
        assert!(!outcome.is_success());
    }

    #[test]
    fn build_failure_propagates() {
        let outcome = DeployOutcome {
            sync: ToolStatus::Success,
            build: Some(ToolStatus::Failed { code: 255 }),
        };
        assert_eq!(outcome.exit_code(), 255);
    }

    #[test]
    fn skipped_build_is_success() {
        let outcome = DeployOutcome {
            sync: ToolStatus::Success,
            build: None,
        };
        assert!(outcome.is_success());
    }
}
