//! Rsync transfer
//!
//! Builds the mirror invocation for the sync step: recursive, compressed,
//! deleting remote files that no longer exist locally.

use std::path::{Path, PathBuf};

use crate::domain::ports::Invocation;
use crate::domain::value_objects::{ExcludePatterns, RemoteTarget};

/// The sync step as an rsync invocation.
#[derive(Debug, Clone)]
pub struct RsyncSync {
    source: PathBuf,
    target: RemoteTarget,
    excludes: ExcludePatterns,
    dry_run: bool,
}

impl RsyncSync {
    pub fn new(source: impl Into<PathBuf>, target: RemoteTarget) -> Self {
        Self {
            source: source.into(),
            target,
            excludes: ExcludePatterns::standard(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn invocation(&self) -> Invocation {
        let mut inv = Invocation::new("rsync").args(["-avz", "--delete"]);
        if self.dry_run {
            inv = inv.arg("--dry-run");
        }
        inv.args(self.excludes.to_rsync_args())
            .arg(source_contents(&self.source))
            .arg(self.target.rsync_destination())
    }
}

/// `dir/` so rsync copies the directory's contents, not the directory.
fn source_contents(dir: &Path) -> String {
    let s = dir.display().to_string();
    if s.ends_with('/') {
        s
    } else {
        format!("{}/", s)
    }
}
