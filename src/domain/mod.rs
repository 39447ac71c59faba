//! Domain Layer
//!
//! The deploy vocabulary without process spawning.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RemoteTarget, ExcludePatterns)
//! - `services/` - Pure helpers (source root resolution)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No process spawning** - External tools are reached only through ports
//! 2. **Ports & Adapters** - `CommandRunner` and `DeployEventSink` are the seams

pub mod ports;
pub mod services;
pub mod value_objects;
