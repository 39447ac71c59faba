//! Domain Value Objects
//!
//! Immutable value types that describe a deployment.

mod exclude_patterns;
mod remote_target;

pub use exclude_patterns::ExcludePatterns;
pub use remote_target::RemoteTarget;
