//! Common test utilities for robodeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, home and fake `rsync`/`ssh` on PATH
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`
//! - Fixtures: reusable config content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
