//! Exclude patterns value object
//!
//! The fixed set of paths that never leave the workstation during a sync.

use std::fmt;

/// Patterns passed to the sync tool, in the order they are emitted.
///
/// Version-control metadata, Python bytecode, the CMake cache file and
/// directory, and the local build output are all host-specific and would
/// either waste bandwidth or poison the robot's own build.
const STANDARD: [&str; 5] = [".git", "*.pyc", "CMakeCache.txt", "CMakeFiles", "build"];

/// The exclusion set for a deployment.
///
/// There is no way to extend or shrink it: every sync carries exactly
/// these patterns whatever the local tree looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludePatterns {
    patterns: &'static [&'static str],
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExcludePatterns {
    pub fn standard() -> Self {
        Self {
            patterns: &STANDARD,
        }
    }

    pub fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Render as rsync arguments: `--exclude <pattern>` per pattern.
    pub fn to_rsync_args(&self) -> Vec<String> {
        self.patterns
            .iter()
            .flat_map(|p| ["--exclude".to_string(), (*p).to_string()])
            .collect()
    }
}

impl fmt::Display for ExcludePatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.patterns.join(", "))
    }
}
