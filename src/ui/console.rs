//! Console Event Sink
//!
//! Renders deploy events for a human at a terminal. Progress goes to
//! stdout, failures to stderr so they survive `--quiet` and redirection.

use std::cell::RefCell;
use std::io::{self, Write};

use robodeploy::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{
    render_command, render_deploy_header, render_deploy_summary, render_step_finished,
    render_step_skipped, render_step_started,
};

pub struct ConsoleEventSink {
    ui: UiContext,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr())
    }

    pub fn with_writers(ui: UiContext, out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Self {
            ui,
            out: RefCell::new(Box::new(out)),
            err: RefCell::new(Box::new(err)),
        }
    }

    fn progress(&self, text: &str) {
        if self.ui.shows_progress() {
            let mut out = self.out.borrow_mut();
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn failure(&self, text: &str) {
        let mut err = self.err.borrow_mut();
        let _ = writeln!(err, "{}", text);
        let _ = err.flush();
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);

        match event {
            DeployEvent::Started {
                source,
                destination,
                dry_run,
            } => {
                self.progress(&render_deploy_header(&source, &destination, dry_run, color, unicode));
            }
            DeployEvent::StepStarted { step, command } => {
                self.progress(&render_step_started(step, color, unicode));
                if self.ui.shows_commands() {
                    self.progress(&render_command(&command, color, unicode));
                }
            }
            DeployEvent::StepFinished { step, exit_code } => {
                let line = render_step_finished(step, exit_code, color, unicode);
                if exit_code == 0 {
                    self.progress(&line);
                } else {
                    self.failure(&line);
                }
            }
            DeployEvent::StepSkipped { step, reason } => {
                self.progress(&render_step_skipped(step, &reason, color, unicode));
            }
            DeployEvent::Completed { exit_code } => {
                self.progress(&render_deploy_summary(exit_code, color, unicode));
            }
        }
    }
}
