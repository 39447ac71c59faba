//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Turning flags + configuration into deploy options
//! - Creating the use case with its process runner
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Wires the deploy use case (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{apply_cli_overrides, create_deploy_use_case, resolve_deploy_options};
