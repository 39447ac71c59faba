//! Deploy Module
//!
//! Orchestrates the two-step deployment flow.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use robodeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(SystemRunner::default());
//! let outcome = use_case.execute(&options, &sink)?;
//! std::process::exit(outcome.exit_code());
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
