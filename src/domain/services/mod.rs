//! Domain Services

pub mod source_root;

pub use source_root::{canonical_source_dir, resolve_source_root};
