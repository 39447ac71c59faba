//! Source root resolution
//!
//! The tool lives one directory below the project it deploys
//! (`<project>/scripts/robodeploy`), so the project root is the parent of
//! the directory that contains it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

/// Resolve the canonical project directory for a tool located at `anchor`.
///
/// Symlinks are resolved before walking up, so a link in `~/bin` pointing
/// at `<project>/scripts/robodeploy` still resolves to `<project>`.
pub fn resolve_source_root(anchor: &Path) -> DeployResult<PathBuf> {
    let resolution_error = |source: io::Error| DeployError::SourceResolution {
        anchor: anchor.to_path_buf(),
        source,
    };

    let canonical = fs::canonicalize(anchor).map_err(resolution_error)?;

    canonical
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            resolution_error(io::Error::new(
                io::ErrorKind::NotFound,
                "location has no parent project directory",
            ))
        })
}

/// Canonicalize an explicitly chosen source directory.
pub fn canonical_source_dir(dir: &Path) -> DeployResult<PathBuf> {
    let canonical = fs::canonicalize(dir).map_err(|source| DeployError::SourceResolution {
        anchor: dir.to_path_buf(),
        source,
    })?;

    if !canonical.is_dir() {
        return Err(DeployError::SourceResolution {
            anchor: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_parent_of_containing_directory() {
        let dir = tempdir().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        let tool = scripts.join("robodeploy");
        fs::write(&tool, "").unwrap();

        let root = resolve_source_root(&tool).unwrap();
        assert_eq!(root, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn result_is_absolute_even_for_relative_anchor() {
        let dir = tempdir().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        let tool = scripts.join("robodeploy");
        fs::write(&tool, "").unwrap();

        let root = resolve_source_root(&tool.join("..").join("robodeploy")).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn missing_anchor_propagates_os_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("deleted").join("robodeploy");

        let err = resolve_source_root(&gone).unwrap_err();
        match err {
            DeployError::SourceResolution { anchor, source } => {
                assert_eq!(anchor, gone);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_before_walking_up() {
        let dir = tempdir().unwrap();
        let scripts = dir.path().join("project").join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        let tool = scripts.join("robodeploy");
        fs::write(&tool, "").unwrap();

        let bin = dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let link = bin.join("robodeploy");
        std::os::unix::fs::symlink(&tool, &link).unwrap();

        let root = resolve_source_root(&link).unwrap();
        assert_eq!(root, fs::canonicalize(dir.path().join("project")).unwrap());
    }

    #[test]
    fn canonical_source_dir_rejects_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(canonical_source_dir(&file).is_err());
        assert_eq!(
            canonical_source_dir(dir.path()).unwrap(),
            fs::canonicalize(dir.path()).unwrap()
        );
    }
}
