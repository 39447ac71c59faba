//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Sync the source tree, then trigger the remote build

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase};
