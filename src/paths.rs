//! Filesystem layout for one sync run.
//!
//! Paths are resolved once from CLI flags and threaded explicitly into
//! each stage; no component reads a global location.

use std::path::{Path, PathBuf};

/// Resolved input/output locations of a sync run.
#[derive(Debug, Clone)]
pub struct SyncPaths {
    /// Root holding `<version>/README.md` snapshot directories.
    pub versions_dir: PathBuf,
    /// Where snapshots are staged as `<version>/index.md`.
    pub docs_versions_dir: PathBuf,
    /// VitePress config containing the `nav:` array.
    pub nav_config: PathBuf,
}

impl SyncPaths {
    /// Conventional layout relative to a repository root:
    /// `versions/`, `docs/versions/`, `docs/.vitepress/config.mts`.
    pub fn from_repo_root(root: &Path) -> Self {
        Self {
            versions_dir: root.join("versions"),
            docs_versions_dir: root.join("docs").join("versions"),
            nav_config: root.join("docs").join(".vitepress").join("config.mts"),
        }
    }
}
