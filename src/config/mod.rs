//! Configuration module for robodeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROBODEPLOY_*)
//! 3. Config file (--config, <project>/robodeploy.toml, ~/.config/robodeploy/config.toml)
//! 4. Built-in defaults (lowest priority)

pub mod env_validator;
mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, RemoteConfig, Verbosity};
