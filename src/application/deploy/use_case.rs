//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Mirror the source tree onto the robot (rsync)
//! 2. Run the build entrypoint in the deployed directory (ssh)
//!
//! The second step only starts when the first exits 0. Nothing is retried.

use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, DeployStep, Invocation, ToolStatus,
};
use crate::error::DeployResult;
use crate::infrastructure::{RsyncSync, SshBuild};

use super::options::DeployOptions;
use super::result::DeployOutcome;

/// Deploy use case, parameterized by the process runner.
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// The sync invocation these options produce
    pub fn sync_invocation(options: &DeployOptions) -> Invocation {
        RsyncSync::new(&options.source, options.target.clone())
            .with_dry_run(options.dry_run)
            .invocation()
    }

    /// The build invocation these options produce
    pub fn build_invocation(options: &DeployOptions) -> Invocation {
        SshBuild::new(options.target.clone())
            .with_script(&options.build_script)
            .invocation()
    }

    /// Execute the deploy use case with event reporting.
    ///
    /// Returns `Err` only when a tool could not be started; non-zero
    /// exits are reported through `DeployOutcome`.
    pub fn execute(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployOutcome> {
        events.on_event(DeployEvent::Started {
            source: options.source.clone(),
            destination: options.target.rsync_destination(),
            dry_run: options.dry_run,
        });

        let sync = self.run_step(DeployStep::Sync, &Self::sync_invocation(options), events)?;

        let build = if !sync.success() {
            events.on_event(DeployEvent::StepSkipped {
                step: DeployStep::Build,
                reason: format!("sync failed with exit code {}", sync.code()),
            });
            None
        } else if let Some(reason) = options.build_skip_reason() {
            events.on_event(DeployEvent::StepSkipped {
                step: DeployStep::Build,
                reason: reason.to_string(),
            });
            None
        } else {
            Some(self.run_step(DeployStep::Build, &Self::build_invocation(options), events)?)
        };

        let outcome = DeployOutcome { sync, build };
        events.on_event(DeployEvent::Completed {
            exit_code: outcome.exit_code(),
        });
        Ok(outcome)
    }

    fn run_step(
        &self,
        step: DeployStep,
        invocation: &Invocation,
        events: &dyn DeployEventSink,
    ) -> DeployResult<ToolStatus> {
        events.on_event(DeployEvent::StepStarted {
            step,
            command: invocation.render(),
        });
        let status = self.runner.run(invocation)?;
        events.on_event(DeployEvent::StepFinished {
            step,
            exit_code: status.code(),
        });
        Ok(status)
    }
}
