//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer is the only place that spawns processes.
//!
//! ## Structure
//!
//! - `process` - `SystemRunner`, the std::process `CommandRunner`
//! - `transfer` - rsync invocation for the sync step
//! - `remote` - ssh invocation for the build step
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod process;
pub mod remote;
pub mod transfer;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::{ChildOutput, SystemRunner};
pub use remote::SshBuild;
pub use transfer::RsyncSync;
