//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Emit a terminal error event (for failures that happen outside the use case)
    pub fn error(&self, message: &str, exit_code: i32) {
        self.write_event(serde_json::json!({
            "event": "error",
            "command": "deploy",
            "message": message,
            "exit_code": exit_code,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                source,
                destination,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "source": source.display().to_string(),
                "destination": destination,
                "dry_run": dry_run,
            }),

            DeployEvent::StepStarted { step, command } => serde_json::json!({
                "event": "step_start",
                "command": "deploy",
                "step": step.as_str(),
                "command_line": command,
            }),

            DeployEvent::StepFinished { step, exit_code } => serde_json::json!({
                "event": "step_finished",
                "command": "deploy",
                "step": step.as_str(),
                "exit_code": exit_code,
            }),

            DeployEvent::StepSkipped { step, reason } => serde_json::json!({
                "event": "step_skipped",
                "command": "deploy",
                "step": step.as_str(),
                "reason": reason,
            }),

            DeployEvent::Completed { exit_code } => {
                let status = if exit_code == 0 { "success" } else { "failed" };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "exit_code": exit_code,
                })
            }
        };

        self.write_event(json);
    }
}
