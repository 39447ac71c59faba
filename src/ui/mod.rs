//! Terminal UI for the robodeploy binary
//!
//! Human output only; `--json` bypasses this module entirely.

pub mod console;
pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
